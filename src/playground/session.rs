//! Per-visitor playground sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::generation::{GenerationKind, GenerationResult};
use super::selection::ModelSelection;
use super::tasks::TaskSlots;
use super::transcript::Transcript;

/// Default idle timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Everything the playground view renders.
#[derive(Debug, Clone)]
pub struct PlaygroundState {
    pub transcript: Transcript,
    pub selection: ModelSelection,
    /// API key as currently edited; persisted only on save or signup.
    pub api_key: String,
    /// A chat turn is awaiting its reply.
    pub is_loading: bool,
    pub image: Option<GenerationResult>,
    pub video: Option<GenerationResult>,
}

impl PlaygroundState {
    #[must_use]
    pub fn new(selection: ModelSelection, api_key: String) -> Self {
        Self {
            transcript: Transcript::new(),
            selection,
            api_key,
            is_loading: false,
            image: None,
            video: None,
        }
    }

    #[must_use]
    pub fn result(&self, kind: GenerationKind) -> Option<&GenerationResult> {
        match kind {
            GenerationKind::Image => self.image.as_ref(),
            GenerationKind::Video => self.video.as_ref(),
        }
    }

    pub fn set_result(&mut self, kind: GenerationKind, result: GenerationResult) {
        match kind {
            GenerationKind::Image => self.image = Some(result),
            GenerationKind::Video => self.video = Some(result),
        }
    }
}

/// A single visitor's playground.
///
/// Cloning is cheap and shares the underlying state.
#[derive(Debug, Clone)]
pub struct PlaygroundSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    state: RwLock<PlaygroundState>,
    tasks: TaskSlots,
    created_at: DateTime<Utc>,
    last_activity: RwLock<DateTime<Utc>>,
}

impl PlaygroundSession {
    fn new(id: String, state: PlaygroundState) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                state: RwLock::new(state),
                tasks: TaskSlots::new(),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskSlots {
        &self.inner.tasks
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PlaygroundState {
        self.inner.state.read().unwrap().clone()
    }

    /// Read from the state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&PlaygroundState) -> R) -> R {
        let guard = self.inner.state.read().unwrap();
        f(&guard)
    }

    /// Mutate the state. The lock is never held across an await point.
    pub fn update<R>(&self, f: impl FnOnce(&mut PlaygroundState) -> R) -> R {
        let mut guard = self.inner.state.write().unwrap();
        let out = f(&mut guard);
        drop(guard);
        self.touch();
        out
    }

    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        // A negative duration means clock skew; treat it as fresh.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        (Utc::now() - self.inner.created_at)
            .to_std()
            .unwrap_or(Duration::from_secs(0))
    }
}

/// Thread-safe store for playground sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, PlaygroundSession>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<PlaygroundSession> {
        self.inner.read().unwrap().get(id).cloned()
    }

    /// Insert a session built from `state`, replacing any previous one.
    pub fn insert(&self, id: impl Into<String>, state: PlaygroundState) -> PlaygroundSession {
        let id = id.into();
        let session = PlaygroundSession::new(id.clone(), state);
        let previous = self.inner.write().unwrap().insert(id, session.clone());
        if let Some(previous) = previous {
            previous.tasks().cancel_all();
        }
        session
    }

    /// Get a session, inserting `state` if it does not exist yet.
    ///
    /// Concurrent callers for the same id all receive the same session.
    pub fn get_or_insert(&self, id: &str, state: PlaygroundState) -> PlaygroundSession {
        let mut guard = self.inner.write().unwrap();
        guard
            .entry(id.to_string())
            .or_insert_with(|| PlaygroundSession::new(id.to_string(), state))
            .clone()
    }

    pub fn remove(&self, id: &str) -> Option<PlaygroundSession> {
        let removed = self.inner.write().unwrap().remove(id);
        if let Some(session) = &removed {
            session.tasks().cancel_all();
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions idle longer than `timeout`, cancelling their requests.
    ///
    /// Returns the number of sessions removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.write().unwrap();
        let before = guard.len();
        guard.retain(|_, session| {
            let expired = session.is_expired_with_timeout(timeout);
            if expired {
                debug!(
                    name: "playground.session.expired",
                    session = %session.id(),
                    age_secs = session.age().as_secs(),
                    "Dropping idle session"
                );
                session.tasks().cancel_all();
            }
            !expired
        });
        before - guard.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn state() -> PlaygroundState {
        PlaygroundState::new(ModelSelection::all(&Catalog::builtin().unwrap()), String::new())
    }

    #[test]
    fn test_session_store() {
        let store = SessionStore::new();
        assert!(store.is_empty());

        let session = store.get_or_insert("abc", state());
        assert_eq!(store.len(), 1);
        assert_eq!(session.id(), "abc");

        session.update(|s| s.api_key = "k-1".into());
        assert!(session.age() < Duration::from_secs(60));
        let again = store.get_or_insert("abc", state());
        assert_eq!(again.snapshot().api_key, "k-1");

        store.remove("abc");
        assert!(store.get("abc").is_none());
    }

    #[test]
    fn test_cleanup_expired() {
        let store = SessionStore::new();
        store.insert("old", state());

        assert_eq!(store.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT), 0);

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(store.cleanup_expired_with_timeout(Duration::from_millis(5)), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_results_per_kind() {
        let mut s = state();
        s.set_result(
            GenerationKind::Video,
            GenerationResult::Ready { url: "v".into() },
        );
        assert!(s.result(GenerationKind::Image).is_none());
        assert_eq!(s.result(GenerationKind::Video).unwrap().url(), Some("v"));
    }
}
