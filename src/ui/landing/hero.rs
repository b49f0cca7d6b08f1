//! Hero section.

use leptos::prelude::*;

/// 3D scene rendered behind the headline.
pub const HERO_SCENE_URL: &str = "https://prod.spline.design/zhZFnwyOYLgqlLWk/scene.splinecode";

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative w-full min-h-[70vh] flex items-center justify-center overflow-hidden">
            // Upgraded to a <spline-viewer> by static/app.js
            <div class="absolute inset-0" data-spline-scene=HERO_SCENE_URL />
            <div class="pointer-events-none absolute inset-0 bg-gradient-to-t from-white/80 via-white/40 to-white/20" />

            <div class="relative z-10 max-w-4xl mx-auto px-6 text-center">
                <h1 class="text-4xl md:text-6xl font-semibold tracking-tight text-gray-900">
                    "One AI to rule them all"
                </h1>
                <p class="mt-6 text-base md:text-lg text-gray-600 leading-relaxed">
                    "ChatGPT, Claude, Gemini, DeepSeek, Grok, and leading Chinese LLMs collaborate in real‑time.
                    A single, minimal workspace that fuses their strengths into one final answer."
                </p>
                <div class="mt-10 flex items-center justify-center gap-4">
                    <a
                        href="#playground"
                        class="inline-flex items-center justify-center rounded-full bg-rose-500 text-white px-6 py-3 text-sm font-medium hover:opacity-90 transition-opacity"
                    >
                        "Try the Playground"
                    </a>
                    <a
                        href="#pricing"
                        class="inline-flex items-center justify-center rounded-full border border-gray-200 text-gray-800 px-6 py-3 text-sm font-medium hover:bg-gray-50 transition"
                    >
                        "View Pricing"
                    </a>
                </div>
            </div>
        </section>
    }
}
