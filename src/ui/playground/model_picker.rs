//! Model checkboxes.

use leptos::prelude::*;

use crate::catalog::ModelDescriptor;
use crate::ui::components::{Badge, Card};

#[component]
pub fn ModelPicker(models: Vec<ModelDescriptor>, selected: Vec<String>) -> impl IntoView {
    view! {
        <div id="model-picker">
            <Card class="p-4">
                <h3 class="text-sm font-medium text-gray-800">"Models"</h3>
                <div class="mt-3 space-y-2">
                    {models
                        .into_iter()
                        .map(|model| {
                            let checked = selected.contains(&model.id);
                            view! { <ModelRow model=model checked=checked /> }
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[component]
fn ModelRow(model: ModelDescriptor, checked: bool) -> impl IntoView {
    let toggle_url = format!("/playground/models/{}/toggle", model.id);

    view! {
        <label
            class="flex items-center justify-between gap-3 text-sm text-gray-700"
            data-model=model.id
            data-selected=checked.to_string()
        >
            <div class="flex items-center gap-3">
                <input
                    type="checkbox"
                    class="h-4 w-4 rounded border-gray-300 text-rose-500 focus:ring-rose-500"
                    checked=checked
                    hx-post=toggle_url
                    hx-trigger="change"
                    hx-target="#model-picker"
                    hx-swap="outerHTML"
                />
                <span>{model.label}</span>
            </div>
            <Badge label=model.tier />
        </label>
    }
}
