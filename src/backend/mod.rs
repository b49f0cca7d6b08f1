//! HTTP client for the external chat/generation backend.
//!
//! The backend owns model dispatch, consensus synthesis and key issuance.
//! This module only speaks its four JSON endpoints:
//!
//! - `POST /api/chat`
//! - `POST /api/generate/image`
//! - `POST /api/generate/video`
//! - `POST /api/auth/signup`

pub mod client;
pub mod error;
pub mod types;

pub use client::BackendClient;
pub use error::{BackendError, Result};
pub use types::*;
