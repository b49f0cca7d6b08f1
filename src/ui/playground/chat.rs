//! Transcript and composer.

use leptos::prelude::*;

use crate::playground::{ChatMessage, Role};
use crate::ui::components::{Button, Input, SendIcon};

#[component]
pub fn ChatPanel(messages: Vec<ChatMessage>, is_loading: bool) -> impl IntoView {
    view! {
        <div
            id="chat-panel"
            class="rounded-3xl border border-gray-200 flex flex-col overflow-hidden min-h-[520px]"
        >
            <div
                id="chat-transcript"
                class="flex-1 overflow-y-auto p-6 space-y-6 bg-white"
                aria-live="polite"
            >
                {messages.into_iter().map(|m| view! { <MessageBubble message=m /> }).collect_view()}
                {is_loading.then(|| view! { <ThinkingBubble /> })}
                // Shown by HTMX while a send is in flight.
                <div id="chat-thinking" class="htmx-indicator">
                    <ThinkingBubble />
                </div>
                <div id="chat-end" />
            </div>

            <div class="border-t border-gray-200 p-4">
                <form
                    class="flex items-center gap-3"
                    hx-post="/playground/chat"
                    hx-target="#chat-panel"
                    hx-swap="outerHTML"
                    hx-indicator="#chat-thinking"
                    hx-disabled-elt="find button"
                >
                    <Input name="message" placeholder="Ask anything…" class="flex-1 px-5 py-3" />
                    <Button button_type="submit" disabled=is_loading class="px-5 py-3 inline-flex items-center gap-2">
                        "Send"
                        <SendIcon />
                    </Button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let (wrapper, bubble, role) = match message.role {
        Role::User => ("ml-auto max-w-[80%]", "bg-gray-900 text-white", "user"),
        Role::Assistant => (
            "mr-auto max-w-[80%]",
            "bg-gray-50 text-gray-800 border border-gray-200",
            "assistant",
        ),
    };
    let bubble = format!("rounded-2xl px-4 py-3 text-sm leading-relaxed {bubble}");

    view! {
        <div class=wrapper data-role=role>
            <div class=bubble>{message.content}</div>
        </div>
    }
}

#[component]
fn ThinkingBubble() -> impl IntoView {
    view! {
        <div class="mr-auto max-w-[80%]">
            <div class="rounded-2xl px-4 py-3 text-sm bg-gray-50 text-gray-700 border border-gray-200">
                "Thinking…"
            </div>
        </div>
    }
}
