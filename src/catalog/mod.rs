//! Declarative site catalog.
//!
//! The model list shown in the playground, the feature cards and the pricing
//! tiers are data rather than code. A default catalog ships with the binary
//! (`default.yaml`); operators can point `catalog.path` at their own file.
//!
//! # Example
//!
//! ```rust
//! use omnipanel::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! assert_eq!(catalog.models.len(), 6);
//! assert!(catalog.model("grok").is_some());
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("default.yaml");

/// Catalog loading errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

/// A selectable backend model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Identifier sent to the backend in `selected_models`.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Lowest pricing tier that includes the model.
    pub tier: String,
}

/// A marketing feature card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

/// A pricing tier card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    pub tagline: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Everything the landing page and playground render from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub models: Vec<ModelDescriptor>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse and validate a YAML catalog.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let source = tokio::fs::read_to_string(path).await?;
        Self::from_yaml(&source)
    }

    /// Load `path` when given, otherwise the builtin catalog.
    pub async fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from_file(path).await,
            None => Self::builtin(),
        }
    }

    /// Look up a model by id.
    #[must_use]
    pub fn model(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    /// All model ids in catalog order.
    #[must_use]
    pub fn model_ids(&self) -> Vec<String> {
        self.models.iter().map(|m| m.id.clone()).collect()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.models.is_empty() {
            return Err(CatalogError::Invalid("at least one model is required".into()));
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if model.id.trim().is_empty() {
                return Err(CatalogError::Invalid("model id cannot be empty".into()));
            }
            if !seen.insert(model.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate model id: {}",
                    model.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(
            catalog.model_ids(),
            vec!["gpt-4", "claude-3", "gemini-1.5", "deepseek", "grok", "ernie"]
        );
        assert_eq!(catalog.model("ernie").unwrap().label, "Baidu ERNIE");
        assert_eq!(catalog.features.len(), 3);

        let names: Vec<_> = catalog.tiers.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Starter", "Plus", "Pro", "Enterprise"]);
        assert_eq!(catalog.tiers[2].features[0], "GPT‑4, Claude, Gemini");
        assert_eq!(catalog.tiers[2].tagline, "Top‑tier reasoning");
        assert_eq!(catalog.tiers[3].price, "Custom");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let yaml = r#"
models:
  - { id: a, label: A, tier: Pro }
  - { id: a, label: B, tier: Pro }
"#;
        let err = Catalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_rejects_empty_models() {
        let err = Catalog::from_yaml("models: []").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_optional_sections_default() {
        let catalog = Catalog::from_yaml("models:\n  - { id: x, label: X, tier: Plus }\n").unwrap();
        assert!(catalog.features.is_empty());
        assert!(catalog.tiers.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        tokio::fs::write(&path, "models:\n  - { id: solo, label: Solo, tier: Starter }\n")
            .await
            .unwrap();

        let catalog = Catalog::load(path.to_str()).await.unwrap();
        assert_eq!(catalog.model_ids(), vec!["solo"]);
        assert_eq!(catalog.model("solo").unwrap().tier, "Starter");
    }
}
