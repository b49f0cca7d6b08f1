//! Image/video generation results.

use serde::{Deserialize, Serialize};

/// Generator kind; doubles as the endpoint suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    Image,
    Video,
}

impl GenerationKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Parse a path segment.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Image",
            Self::Video => "Video",
        }
    }
}

/// Outcome of the latest generation request of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Ready { url: String },
    Failed { error: String },
}

impl GenerationResult {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Ready { url } => Some(url),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ready { .. } => None,
            Self::Failed { error } => Some(error),
        }
    }

    /// Line rendered under the generator.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Ready { url } => format!("URL: {url}"),
            Self::Failed { error } => format!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let ok = GenerationResult::Ready {
            url: "https://cdn/x.png".into(),
        };
        assert_eq!(ok.summary(), "URL: https://cdn/x.png");
        assert!(ok.error().is_none());

        let failed = GenerationResult::Failed {
            error: "quota".into(),
        };
        assert_eq!(failed.summary(), "Error: quota");
        assert!(failed.url().is_none());
    }

    #[test]
    fn test_kind_segments() {
        assert_eq!(GenerationKind::from_segment("video"), Some(GenerationKind::Video));
        assert_eq!(GenerationKind::from_segment("audio"), None);
        assert_eq!(GenerationKind::Image.as_str(), "image");
    }
}
