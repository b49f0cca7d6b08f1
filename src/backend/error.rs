//! Backend error taxonomy.

use thiserror::Error;

/// Errors from a backend call.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Network or transport failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response. Displays the backend's `detail` verbatim.
    #[error("{detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// `detail` from the body, or an endpoint-specific fallback.
        detail: String,
    },

    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Base URL could not be joined with an endpoint path.
    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl BackendError {
    /// HTTP status for API errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for backend calls.
pub type Result<T> = std::result::Result<T, BackendError>;
