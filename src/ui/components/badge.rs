//! Small muted label.

use leptos::prelude::*;

/// Tier label shown next to a model.
#[component]
pub fn Badge(
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <span class="text-xs text-gray-500">{label}</span>
    }
}
