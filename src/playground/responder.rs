//! Chat responders: the networked backend or the offline simulation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::transcript::ChatMessage;
use crate::backend::{BackendClient, BackendError, ChatRequest};

/// Fallback reply when the backend answers without a `final` field.
pub const EMPTY_REPLY: &str = "No response";

/// How the playground answers chat messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaygroundMode {
    /// Forward to the backend's `/api/chat`.
    #[default]
    Networked,
    /// Answer locally with a templated reply after a fixed delay.
    Simulated,
}

/// Everything a responder needs, captured when the message is sent.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    /// Trimmed user input.
    pub input: String,
    /// Non-assistant history followed by the new input.
    pub history: Vec<ChatMessage>,
    /// Selected model ids at send time.
    pub selected_models: Vec<String>,
    /// API key at send time (may be empty).
    pub api_key: String,
}

/// Produces the assistant reply for a chat turn.
#[async_trait]
pub trait ChatResponder: Send + Sync + std::fmt::Debug {
    async fn reply(&self, turn: ChatTurn) -> Result<String, BackendError>;
}

/// Forwards turns to the backend.
#[derive(Debug, Clone)]
pub struct NetworkResponder {
    client: BackendClient,
}

impl NetworkResponder {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatResponder for NetworkResponder {
    async fn reply(&self, turn: ChatTurn) -> Result<String, BackendError> {
        let request = ChatRequest {
            messages: turn.history,
            selected_models: turn.selected_models,
        };
        let final_text = self.client.chat(&request, &turn.api_key).await?;
        Ok(final_text
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| EMPTY_REPLY.to_string()))
    }
}

/// Offline demo responder.
#[derive(Debug, Clone)]
pub struct SimulatedResponder {
    delay: Duration,
}

impl SimulatedResponder {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// The canned reply for `input` across `model_count` models.
    #[must_use]
    pub fn compose(model_count: usize, input: &str) -> String {
        format!("Consensus across {model_count} models: a synthesized answer to \"{input}\".")
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[async_trait]
impl ChatResponder for SimulatedResponder {
    async fn reply(&self, turn: ChatTurn) -> Result<String, BackendError> {
        tokio::time::sleep(self.delay).await;
        Ok(Self::compose(turn.selected_models.len(), &turn.input))
    }
}
