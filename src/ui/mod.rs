//! UI components and layouts.
//!
//! Leptos SSR components rendered to HTML strings on the server. The browser
//! side is plain HTMX plus a small script (`static/app.js`).
//!
//! # Structure
//!
//! - [`app`]: page shell, header, footer and render entry points
//! - [`components`]: reusable building blocks
//! - [`landing`]: hero, features and pricing sections
//! - [`playground`]: playground panels and fragments

pub mod app;
pub mod components;
pub mod landing;
pub mod playground;

pub use app::{
    render, render_chat_panel, render_generator, render_key_panel, render_model_picker,
    render_page,
};
