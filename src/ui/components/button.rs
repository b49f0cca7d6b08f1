//! Button component with variants.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Rose call-to-action button.
    #[default]
    Primary,
    /// Near-black button used by the generators.
    Dark,
    /// Bordered button on white.
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-rose-500 text-white hover:opacity-90",
            Self::Dark => "bg-gray-900 text-white hover:opacity-90",
            Self::Outline => "border border-gray-200 text-gray-800 hover:bg-gray-50",
        }
    }
}

/// Pill-shaped button.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline>"Save"</Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Whether the button is disabled.
    #[prop(default = false)]
    disabled: bool,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-full px-4 py-2 text-sm font-medium transition-opacity disabled:opacity-40 {} {}",
        variant.classes(),
        class
    );

    view! {
        <button type=button_type class=classes disabled=disabled>
            {children()}
        </button>
    }
}
