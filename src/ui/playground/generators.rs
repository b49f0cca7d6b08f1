//! Image and video generators.

use leptos::prelude::*;

use crate::playground::{GenerationKind, GenerationResult};
use crate::ui::components::{Button, ButtonVariant, Input};

/// One generator form plus its latest result.
#[component]
pub fn Generator(
    kind: GenerationKind,
    result: Option<GenerationResult>,
    #[prop(into, default = String::new())] prompt: String,
) -> impl IntoView {
    let id = format!("generator-{}", kind.as_str());
    let target = format!("#{id}");
    let url = format!("/playground/generate/{}", kind.as_str());
    let placeholder = match kind {
        GenerationKind::Image => "Describe the image…",
        GenerationKind::Video => "Describe the video…",
    };

    view! {
        <div id=id>
            <form hx-post=url hx-target=target hx-swap="outerHTML">
                <label class="block text-xs text-gray-600 mb-1">
                    {format!("{} prompt", kind.label())}
                </label>
                <Input name="prompt" placeholder=placeholder value=prompt class="px-4 py-2" />
                <Button variant=ButtonVariant::Dark button_type="submit" class="mt-2 w-full">
                    {format!("Generate {}", kind.label())}
                </Button>
            </form>
            {result
                .map(|r| {
                    let status = if r.url().is_some() { "ready" } else { "failed" };
                    view! {
                        <div class="mt-2 text-xs text-gray-600 break-all" data-result=status>
                            {r.summary()}
                        </div>
                    }
                })}
        </div>
    }
}
