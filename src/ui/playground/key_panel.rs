//! API key panel.

use leptos::prelude::*;

use crate::ui::components::{ButtonVariant, Input};

/// Key field with Save and Generate actions.
///
/// Editing the field updates the session's key; Save also persists it;
/// Generate asks the backend for a fresh key.
#[component]
pub fn KeyPanel(#[prop(into)] api_key: String) -> impl IntoView {
    let outline = format!("rounded-full px-4 py-2 text-sm {}", ButtonVariant::Outline.classes());
    let primary = format!("rounded-full px-4 py-2 text-sm {}", ButtonVariant::Primary.classes());

    view! {
        <div
            id="key-panel"
            class="mb-6 rounded-2xl border border-gray-200 p-4"
        >
            <form
                class="flex flex-col md:flex-row gap-3 items-start md:items-center"
                hx-post="/playground/key"
                hx-trigger="change"
                hx-target="#key-panel"
                hx-swap="outerHTML"
            >
                <div class="flex-1 w-full">
                    <label class="block text-xs text-gray-600 mb-1">"API Key"</label>
                    <Input
                        name="api_key"
                        id="api-key-input"
                        placeholder="Paste your API key or click Generate"
                        value=api_key
                        class="px-5 py-3"
                    />
                </div>
                <div class="flex gap-3">
                    <button
                        type="button"
                        class=outline
                        hx-post="/playground/key/save"
                        hx-target="#key-panel"
                        hx-swap="outerHTML"
                    >
                        "Save"
                    </button>
                    <button
                        type="button"
                        class=primary
                        hx-post="/playground/signup"
                        hx-target="#key-panel"
                        hx-swap="outerHTML"
                    >
                        "Generate"
                    </button>
                </div>
            </form>
        </div>
    }
}
