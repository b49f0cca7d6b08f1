//! Page shell and render entry points.

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::catalog::{Catalog, ModelDescriptor};
use crate::playground::{GenerationKind, GenerationResult, PlaygroundMode, PlaygroundState};
use crate::ui::components::SparklesIcon;
use crate::ui::landing::{Features, Hero, Pricing};
use crate::ui::playground::{ChatPanel, Generator, KeyPanel, ModelPicker, Playground};

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render<F, V>(view_fn: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view_fn().into_view().to_html())
}

/// Render the complete landing page.
pub fn render_page(catalog: &Catalog, state: PlaygroundState, mode: PlaygroundMode) -> String {
    let models = catalog.models.clone();
    let features = catalog.features.clone();
    let tiers = catalog.tiers.clone();
    let year = Utc::now().year();

    let body = render(move || {
        view! {
            <Header />
            <main>
                <Hero />
                <Features features=features />
                <Playground models=models state=state mode=mode />
                <Pricing tiers=tiers />
            </main>
            <Footer year=year />
        }
    });
    html_shell("OmniPanel", &body)
}

pub fn render_key_panel(api_key: &str) -> String {
    let api_key = api_key.to_string();
    render(move || view! { <KeyPanel api_key=api_key /> })
}

pub fn render_model_picker(models: &[ModelDescriptor], selected: &[String]) -> String {
    let models = models.to_vec();
    let selected = selected.to_vec();
    render(move || view! { <ModelPicker models=models selected=selected /> })
}

pub fn render_generator(
    kind: GenerationKind,
    result: Option<GenerationResult>,
    prompt: &str,
) -> String {
    let prompt = prompt.to_string();
    render(move || view! { <Generator kind=kind result=result prompt=prompt /> })
}

pub fn render_chat_panel(state: &PlaygroundState) -> String {
    let messages = state.transcript.messages().to_vec();
    let is_loading = state.is_loading;
    render(move || view! { <ChatPanel messages=messages is_loading=is_loading /> })
}

/// Wrap rendered body markup in the HTML document.
fn html_shell(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="One workspace that fuses leading AI models into a single answer.">
    <title>{title}</title>

    <!-- Local scripts only -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <script defer src="/static/app.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen bg-white text-gray-900">
{body}
</body>
</html>"#
    )
}

/// Site header with in-page navigation.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="px-6 py-5 flex items-center justify-between max-w-6xl mx-auto">
            <a href="/" class="flex items-center gap-2 text-sm font-semibold tracking-tight">
                <SparklesIcon class="text-rose-500" />
                "OmniPanel"
            </a>
            <nav class="hidden md:flex items-center gap-6 text-sm text-gray-700">
                <a href="#playground" class="hover:text-gray-900">"Playground"</a>
                <a href="#pricing" class="hover:text-gray-900">"Pricing"</a>
                <a href="#" class="rounded-full bg-rose-500 text-white px-4 py-2 hover:opacity-90">
                    "Sign in"
                </a>
            </nav>
        </header>
    }
}

#[component]
fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="px-6 py-10 max-w-6xl mx-auto text-sm text-gray-500">
            <div class="flex items-center justify-between">
                <span>{format!("© {year} OmniPanel")}</span>
                <a href="#" class="hover:text-gray-700">"Privacy & Terms"</a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::ModelSelection;

    fn state(catalog: &Catalog) -> PlaygroundState {
        PlaygroundState::new(ModelSelection::all(catalog), "sk-test".into())
    }

    #[test]
    fn test_page_contains_every_section() {
        let catalog = Catalog::builtin().unwrap();
        let html = render_page(&catalog, state(&catalog), PlaygroundMode::Networked);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("One AI to rule them all"));
        assert!(html.contains("collaborate in real‑time"));
        assert!(html.contains("Simple, usage‑aware pricing"));
        assert!(html.contains("Model Council"));
        assert!(html.contains(r#"id="playground""#));
        assert!(html.contains(r#"id="pricing""#));
        assert!(html.contains("Enterprise"));
        assert!(html.contains("Baidu ERNIE"));
        assert!(html.contains("sk-test"));
        assert!(html.contains(&format!("© {} OmniPanel", Utc::now().year())));
        assert!(!html.contains("Demo mode"));
    }

    #[test]
    fn test_simulated_mode_is_labelled() {
        let catalog = Catalog::builtin().unwrap();
        let html = render_page(&catalog, state(&catalog), PlaygroundMode::Simulated);
        assert!(html.contains("Demo mode"));
    }

    #[test]
    fn test_model_picker_marks_selection() {
        let catalog = Catalog::builtin().unwrap();
        let html = render_model_picker(&catalog.models, &["grok".to_string()]);

        assert!(html.contains(r#"data-model="grok" data-selected="true""#));
        assert!(html.contains(r#"data-model="ernie" data-selected="false""#));
        assert!(html.contains("/playground/models/grok/toggle"));
    }

    #[test]
    fn test_generator_renders_result() {
        let html = render_generator(
            GenerationKind::Image,
            Some(GenerationResult::Failed {
                error: "quota exceeded".into(),
            }),
            "a cat",
        );
        assert!(html.contains(r#"id="generator-image""#));
        assert!(html.contains("Error: quota exceeded"));
        assert!(!html.contains("URL:"));
    }

    #[test]
    fn test_chat_panel_shows_thinking_while_loading() {
        let catalog = Catalog::builtin().unwrap();
        let mut s = state(&catalog);
        s.transcript.push_user("hello");
        s.is_loading = true;

        let html = render_chat_panel(&s);
        assert!(html.contains(r#"data-role="user""#));
        assert!(html.contains("hello"));
        // One bubble for the pending reply, one hidden HTMX indicator.
        assert_eq!(html.matches("Thinking…").count(), 2);
    }
}
