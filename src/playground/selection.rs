//! Model selection: an ordered subset of the catalog.

use thiserror::Error;

use crate::catalog::Catalog;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

/// Selected model ids, in the order they were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    catalog_ids: Vec<String>,
    selected: Vec<String>,
}

impl ModelSelection {
    /// Every catalog model, selected.
    #[must_use]
    pub fn all(catalog: &Catalog) -> Self {
        let ids = catalog.model_ids();
        Self {
            selected: ids.clone(),
            catalog_ids: ids,
        }
    }

    /// Deselect `id` if selected, otherwise append it.
    ///
    /// Returns whether the model is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> Result<bool, SelectionError> {
        if !self.catalog_ids.iter().any(|c| c == id) {
            return Err(SelectionError::UnknownModel(id.to_string()));
        }
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            Ok(false)
        } else {
            self.selected.push(id.to_string());
            Ok(true)
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn selection() -> ModelSelection {
        ModelSelection::all(&Catalog::builtin().unwrap())
    }

    #[test]
    fn test_starts_with_full_catalog() {
        let sel = selection();
        assert_eq!(sel.len(), 6);
        assert!(sel.contains("ernie"));
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut sel = selection();
        let before: HashSet<_> = sel.ids().iter().cloned().collect();

        assert!(!sel.toggle("claude-3").unwrap());
        assert!(!sel.contains("claude-3"));
        assert!(sel.toggle("claude-3").unwrap());

        let after: HashSet<_> = sel.ids().iter().cloned().collect();
        assert_eq!(before, after);
        // Re-selected models go to the end.
        assert_eq!(sel.ids().last().unwrap(), "claude-3");
    }

    #[test]
    fn test_unknown_model_rejected() {
        let mut sel = selection();
        assert_eq!(
            sel.toggle("llama"),
            Err(SelectionError::UnknownModel("llama".into()))
        );
        assert_eq!(sel.len(), 6);
    }
}
