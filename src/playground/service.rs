//! Playground operations.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::generation::{GenerationKind, GenerationResult};
use super::responder::{ChatResponder, ChatTurn};
use super::selection::{ModelSelection, SelectionError};
use super::session::{PlaygroundSession, PlaygroundState, SessionStore};
use super::tasks::TaskPurpose;
use super::transcript::ChatMessage;
use crate::backend::{BackendClient, BackendError};
use crate::catalog::Catalog;
use crate::credentials::{CredentialError, CredentialStore};

/// Result of a chat send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// A previous message is still awaiting its reply.
    Busy,
    /// The assistant entry appended for this turn.
    Completed(ChatMessage),
    /// The turn was cancelled before a reply arrived.
    Cancelled,
}

/// Drives every playground interaction for every visitor.
#[derive(Debug, Clone)]
pub struct PlaygroundService {
    catalog: Arc<Catalog>,
    sessions: SessionStore,
    responder: Arc<dyn ChatResponder>,
    backend: BackendClient,
    credentials: Arc<dyn CredentialStore>,
}

impl PlaygroundService {
    #[must_use]
    pub fn new(
        catalog: Arc<Catalog>,
        responder: Arc<dyn ChatResponder>,
        backend: BackendClient,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            catalog,
            sessions: SessionStore::new(),
            responder,
            backend,
            credentials,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The visitor's session, created on first use with their saved key.
    pub async fn session(&self, client_id: &str) -> PlaygroundSession {
        if let Some(session) = self.sessions.get(client_id) {
            return session;
        }

        let api_key = match self.credentials.load(client_id).await {
            Ok(key) => key.unwrap_or_default(),
            Err(e) => {
                warn!(name: "credentials.load.failed", error = %e, "Starting without a saved key");
                String::new()
            }
        };
        let state = PlaygroundState::new(ModelSelection::all(&self.catalog), api_key);
        self.sessions.get_or_insert(client_id, state)
    }

    /// Current state for rendering.
    pub async fn snapshot(&self, client_id: &str) -> PlaygroundState {
        self.session(client_id).await.snapshot()
    }

    /// Send a chat message and wait for its reply.
    pub async fn send(&self, client_id: &str, input: &str) -> SendOutcome {
        let input = input.trim();
        if input.is_empty() {
            return SendOutcome::Ignored;
        }

        let session = self.session(client_id).await;
        if session.read(|state| state.is_loading) {
            return SendOutcome::Busy;
        }
        let turn = session.update(|state| {
            if state.is_loading {
                return None;
            }
            let history = state.transcript.request_history(input);
            state.transcript.push_user(input);
            state.is_loading = true;
            Some(ChatTurn {
                input: input.to_string(),
                history,
                selected_models: state.selection.ids().to_vec(),
                api_key: state.api_key.clone(),
            })
        });
        let Some(turn) = turn else {
            return SendOutcome::Busy;
        };

        info!(
            name: "playground.chat.sent",
            session = %session.id(),
            models = turn.selected_models.len(),
            "Chat message sent"
        );

        // The turn runs detached so a dropped request still completes it.
        let responder = Arc::clone(&self.responder);
        let turn_session = session.clone();
        let handle = tokio::spawn(async move {
            let session = turn_session;
            let outcome = session
                .tasks()
                .run(
                    TaskPurpose::Chat,
                    async move { responder.reply(turn).await },
                    |result| {
                        let content = match result {
                            Ok(reply) => reply,
                            Err(e) => {
                                warn!(
                                    name: "playground.chat.failed",
                                    status = ?e.status(),
                                    error = %e,
                                    "Chat request failed"
                                );
                                format!("Error: {e}")
                            }
                        };
                        session.update(|state| {
                            state.transcript.push_assistant(content);
                            state.is_loading = false;
                            state.transcript.last().cloned()
                        })
                    },
                )
                .await;

            match outcome {
                Some(Some(reply)) => SendOutcome::Completed(reply),
                _ => {
                    session.update(|state| state.is_loading = false);
                    SendOutcome::Cancelled
                }
            }
        });

        match handle.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(name: "playground.chat.aborted", error = %e, "Chat turn did not finish");
                session.update(|state| state.is_loading = false);
                SendOutcome::Cancelled
            }
        }
    }

    /// Toggle a model in the visitor's selection.
    pub async fn toggle_model(&self, client_id: &str, model_id: &str) -> Result<bool, SelectionError> {
        let session = self.session(client_id).await;
        let selected = session.update(|state| state.selection.toggle(model_id))?;
        if let Some(model) = self.catalog.model(model_id) {
            debug!(name: "playground.model.toggled", model = %model.label, selected, "Model toggled");
        }
        Ok(selected)
    }

    /// Replace the in-memory key without persisting it.
    pub async fn set_api_key(&self, client_id: &str, key: &str) {
        let session = self.session(client_id).await;
        session.update(|state| state.api_key = key.to_string());
    }

    /// Replace the key and persist it.
    pub async fn save_api_key(&self, client_id: &str, key: &str) -> Result<(), CredentialError> {
        self.set_api_key(client_id, key).await;
        self.credentials.save(client_id, key).await
    }

    /// Request an image or video.
    ///
    /// Returns `None` for an empty prompt, or when a newer request of the same
    /// kind superseded this one.
    pub async fn generate(
        &self,
        client_id: &str,
        kind: GenerationKind,
        prompt: &str,
    ) -> Option<GenerationResult> {
        if prompt.trim().is_empty() {
            return None;
        }

        let session = self.session(client_id).await;
        let api_key = session.read(|state| state.api_key.clone());
        let purpose = match kind {
            GenerationKind::Image => TaskPurpose::Image,
            GenerationKind::Video => TaskPurpose::Video,
        };

        info!(name: "playground.generate.requested", kind = kind.as_str(), "Generation requested");

        let backend = self.backend.clone();
        let prompt = prompt.to_string();
        let task_session = session.clone();
        let handle = tokio::spawn(async move {
            let session = task_session;
            session
                .tasks()
                .run(
                    purpose,
                    async move { backend.generate(kind, &prompt, &api_key).await },
                    |result| {
                        let result = match result {
                            Ok(url) => GenerationResult::Ready { url },
                            Err(e) => {
                                warn!(
                                    name: "playground.generate.failed",
                                    kind = kind.as_str(),
                                    status = ?e.status(),
                                    error = %e,
                                    "Generation failed"
                                );
                                GenerationResult::Failed {
                                    error: e.to_string(),
                                }
                            }
                        };
                        session.update(|state| state.set_result(kind, result.clone()));
                        result
                    },
                )
                .await
        });

        match handle.await {
            Ok(result) => result,
            Err(e) => {
                warn!(name: "playground.generate.aborted", error = %e, "Generation did not finish");
                None
            }
        }
    }

    /// Obtain a key from the backend and persist it.
    ///
    /// On failure the current key is left untouched and the error is returned
    /// for the caller to surface.
    pub async fn signup(&self, client_id: &str) -> Result<String, BackendError> {
        let email = format!("guest+{}@example.com", Utc::now().timestamp_millis());
        let key = self.backend.signup(&email).await?;

        let session = self.session(client_id).await;
        session.update(|state| state.api_key = key.clone());
        if let Err(e) = self.credentials.save(client_id, &key).await {
            warn!(name: "credentials.save.failed", error = %e, "Issued key kept in memory only");
        }

        info!(name: "playground.signup.completed", session = %session.id(), "API key issued");
        Ok(key)
    }

    /// Periodically drop idle sessions.
    pub fn spawn_session_sweeper(&self, timeout: Duration) -> JoinHandle<()> {
        let sessions = self.sessions.clone();
        let period = (timeout / 2).max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let removed = sessions.cleanup_expired_with_timeout(timeout);
                if removed > 0 {
                    info!(name: "playground.sessions.expired", removed, "Expired idle sessions");
                }
            }
        })
    }
}
