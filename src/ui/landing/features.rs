//! Feature cards.

use leptos::prelude::*;

use crate::catalog::Feature;
use crate::ui::components::Card;

#[component]
pub fn Features(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section id="features" class="max-w-5xl mx-auto px-6 py-20">
            <div class="grid md:grid-cols-3 gap-8">
                {features
                    .into_iter()
                    .map(|f| {
                        view! {
                            <Card class="p-6">
                                <h3 class="text-lg font-medium text-gray-900">{f.title}</h3>
                                <p class="mt-2 text-sm text-gray-600 leading-relaxed">{f.description}</p>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
