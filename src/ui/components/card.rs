//! Bordered card container.

use leptos::prelude::*;

/// Rounded, bordered card used by features, pricing and playground panels.
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("rounded-2xl border border-gray-200 {class}");

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Section header with a title and a subtitle.
#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <header class=class>
            <h2 class="text-2xl md:text-3xl font-semibold text-gray-900">{title}</h2>
            <p class="mt-2 text-gray-600">{subtitle}</p>
        </header>
    }
}
