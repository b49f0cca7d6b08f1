//! Cancellable per-purpose request slots.
//!
//! Each session owns one slot per [`TaskPurpose`]. Starting a request cancels
//! whatever is in flight for the same purpose, and only the newest request of
//! a purpose may publish its result.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// What a background request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPurpose {
    Chat,
    Image,
    Video,
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    token: CancellationToken,
}

/// In-flight request bookkeeping for one session.
#[derive(Debug, Default)]
pub struct TaskSlots {
    slots: Mutex<HashMap<TaskPurpose, Slot>>,
    next_generation: Mutex<u64>,
}

impl TaskSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` in the slot for `purpose`, superseding any in-flight task.
    ///
    /// `publish` receives the output only while this task is still the newest
    /// for its purpose; the check and the call happen under the slot lock, so
    /// a superseded task can never overwrite a newer result. Returns `None`
    /// when the task was cancelled or superseded.
    pub async fn run<F, T, P, R>(&self, purpose: TaskPurpose, task: F, publish: P) -> Option<R>
    where
        F: Future<Output = T>,
        P: FnOnce(T) -> R,
    {
        let token = CancellationToken::new();
        let generation = {
            let mut next = self.next_generation.lock().unwrap();
            *next += 1;
            *next
        };

        {
            let mut slots = self.slots.lock().unwrap();
            let previous = slots.insert(
                purpose,
                Slot {
                    generation,
                    token: token.clone(),
                },
            );
            if let Some(previous) = previous {
                debug!(name: "playground.task.superseded", ?purpose, "Cancelling in-flight request");
                previous.token.cancel();
            }
        }

        let output = tokio::select! {
            biased;
            () = token.cancelled() => None,
            out = task => Some(out),
        };

        let mut slots = self.slots.lock().unwrap();
        let current = slots
            .get(&purpose)
            .is_some_and(|slot| slot.generation == generation);
        if !current {
            return None;
        }
        slots.remove(&purpose);
        output.map(publish)
    }

    /// Whether a task is in flight for `purpose`.
    #[must_use]
    pub fn is_running(&self, purpose: TaskPurpose) -> bool {
        self.slots.lock().unwrap().contains_key(&purpose)
    }

    /// Cancel every in-flight task.
    pub fn cancel_all(&self) {
        let mut slots = self.slots.lock().unwrap();
        for (_, slot) in slots.drain() {
            slot.token.cancel();
        }
    }
}
