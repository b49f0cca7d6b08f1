//! OmniPanel
//!
//! Marketing site and chat playground for a multi-model AI console. The
//! consensus engine itself lives behind an external HTTP backend; this crate
//! renders the site and brokers the playground's calls to that backend.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving the page and HTMX fragments
//! - **Playground**: per-visitor sessions, cancellable requests, networked or simulated chat
//! - **Backend client**: typed reqwest client for chat, generation and signup
//! - **UI**: Leptos SSR + HTMX
//!
//! # Modules
//!
//! - [`backend`]: backend HTTP client and error taxonomy
//! - [`catalog`]: models, features and pricing tiers as data
//! - [`config`]: CLI and layered configuration
//! - [`credentials`]: injected API key persistence
//! - [`playground`]: playground state and operations
//! - [`server`]: router and handlers
//! - [`ui`]: views

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod backend;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod playground;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::playground::{PlaygroundMode, PlaygroundService};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Playground sessions and operations.
    pub playground: PlaygroundService,
    /// Chat mode the playground was started in.
    pub mode: PlaygroundMode,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
