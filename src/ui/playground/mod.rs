//! Playground views.
//!
//! Each panel has a stable element id and is also served on its own as an
//! HTMX fragment, so an interaction re-renders only the panel it touched.

mod chat;
mod generators;
mod key_panel;
mod model_picker;

pub use chat::ChatPanel;
pub use generators::Generator;
pub use key_panel::KeyPanel;
pub use model_picker::ModelPicker;

use leptos::prelude::*;

use crate::catalog::ModelDescriptor;
use crate::playground::{GenerationKind, PlaygroundMode, PlaygroundState};
use crate::ui::components::{Card, SectionHeader};

/// The full playground section.
#[component]
pub fn Playground(
    models: Vec<ModelDescriptor>,
    state: PlaygroundState,
    mode: PlaygroundMode,
) -> impl IntoView {
    let PlaygroundState {
        transcript,
        selection,
        api_key,
        is_loading,
        image,
        video,
    } = state;

    view! {
        <section id="playground" class="max-w-5xl mx-auto px-6 py-20">
            <SectionHeader
                title="Playground"
                subtitle="Pick which brains to combine. Responses synthesize the best of each model."
                class="mb-8"
            />
            {(mode == PlaygroundMode::Simulated)
                .then(|| {
                    view! {
                        <p id="demo-mode" class="-mt-4 mb-6 text-xs text-gray-500">
                            "Demo mode: replies are simulated locally."
                        </p>
                    }
                })}

            <KeyPanel api_key=api_key />

            <div class="grid md:grid-cols-[260px,1fr] gap-8">
                <aside class="space-y-4">
                    <ModelPicker models=models selected=selection.ids().to_vec() />

                    <Card class="p-4 space-y-3">
                        <h3 class="text-sm font-medium text-gray-800">"Generators"</h3>
                        <Generator kind=GenerationKind::Image result=image />
                        <Generator kind=GenerationKind::Video result=video />
                        <p class="text-xs text-gray-500">"Tool access scales with your plan."</p>
                    </Card>
                </aside>

                <ChatPanel messages=transcript.messages().to_vec() is_loading=is_loading />
            </div>
        </section>
    }
}
