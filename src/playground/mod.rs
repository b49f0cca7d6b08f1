//! Chat playground.
//!
//! The browser never holds playground state: every visitor gets a
//! [`PlaygroundSession`] on the server, keyed by a cookie, and HTMX posts drive
//! the [`PlaygroundService`] operations.
//!
//! # Architecture
//!
//! - [`Transcript`]: append-only conversation, seeded with a greeting
//! - [`ModelSelection`]: the subset of catalog models to consult
//! - [`GenerationResult`]: latest image/video outcome
//! - [`TaskSlots`]: per-purpose cancellable requests
//! - [`ChatResponder`]: networked backend or offline simulation
//!
//! # Example
//!
//! ```rust
//! use omnipanel::playground::{ModelSelection, Transcript};
//! use omnipanel::catalog::Catalog;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut selection = ModelSelection::all(&catalog);
//! selection.toggle("grok").unwrap();
//! assert_eq!(selection.len(), 5);
//!
//! let mut transcript = Transcript::new();
//! transcript.push_user("Hello!");
//! assert_eq!(transcript.request_history("Again").len(), 2);
//! ```

mod generation;
mod responder;
mod selection;
mod service;
mod session;
mod tasks;
mod transcript;

pub use generation::{GenerationKind, GenerationResult};
pub use responder::{
    ChatResponder, ChatTurn, EMPTY_REPLY, NetworkResponder, PlaygroundMode, SimulatedResponder,
};
pub use selection::{ModelSelection, SelectionError};
pub use service::{PlaygroundService, SendOutcome};
pub use session::{DEFAULT_SESSION_TIMEOUT, PlaygroundSession, PlaygroundState, SessionStore};
pub use tasks::{TaskPurpose, TaskSlots};
pub use transcript::{ChatMessage, GREETING, Role, Transcript};
