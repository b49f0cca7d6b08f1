//! Wire types for the backend endpoints.

use serde::{Deserialize, Serialize};

use crate::playground::ChatMessage;

/// `POST /api/chat` body.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub selected_models: Vec<String>,
}

/// `POST /api/chat` success body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    /// Synthesized answer.
    #[serde(default, rename = "final")]
    pub final_text: Option<String>,
}

/// `POST /api/generate/{image,video}` body.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

/// `POST /api/generate/{image,video}` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateReply {
    pub url: String,
}

/// `POST /api/auth/signup` body.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
}

/// `POST /api/auth/signup` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupReply {
    pub api_key: String,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
