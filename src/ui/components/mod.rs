//! Reusable UI building blocks.
//!
//! - [`Button`]: pill button with variants
//! - [`Card`], [`SectionHeader`]: section containers
//! - [`Input`]: text field
//! - [`Badge`]: muted label
//! - [`SendIcon`], [`SparklesIcon`]: inline SVG icons

mod badge;
mod button;
mod card;
mod icons;
mod input;

pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use card::{Card, SectionHeader};
pub use icons::{SendIcon, SparklesIcon};
pub use input::Input;
