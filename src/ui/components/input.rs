//! Text input component.

use leptos::prelude::*;

/// Pill-shaped text input.
///
/// HTMX attributes live on the surrounding form, so the input itself only
/// carries its name and value.
#[component]
pub fn Input(
    /// Input name attribute.
    name: &'static str,
    /// Input ID attribute.
    #[prop(default = "")]
    id: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value.
    #[prop(into, default = String::new())]
    value: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "w-full rounded-full border border-gray-200 text-sm focus:outline-none \
         focus:ring-2 focus:ring-rose-200 {class}"
    );

    view! {
        <input
            type="text"
            name=name
            id=id
            class=classes
            placeholder=placeholder
            value=value
            autocomplete="off"
        />
    }
}
