//! Pricing tiers.

use leptos::prelude::*;

use crate::catalog::PricingTier;
use crate::ui::components::{Button, Card, SectionHeader};

#[component]
pub fn Pricing(tiers: Vec<PricingTier>) -> impl IntoView {
    view! {
        <section id="pricing" class="max-w-5xl mx-auto px-6 py-20">
            <SectionHeader
                title="Simple, usage‑aware pricing"
                subtitle="Unlock stronger models and generators as you level up."
                class="mb-10 text-center"
            />

            <div class="grid md:grid-cols-4 gap-6">
                {tiers.into_iter().map(|tier| view! { <TierCard tier=tier /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TierCard(tier: PricingTier) -> impl IntoView {
    view! {
        <Card class="p-6 flex flex-col">
            <div>
                <h3 class="text-lg font-medium text-gray-900">{tier.name}</h3>
                <div class="mt-1 text-3xl font-semibold text-gray-900">{tier.price}</div>
                <p class="mt-1 text-sm text-gray-600">{tier.tagline}</p>
            </div>
            <ul class="mt-6 space-y-2 text-sm text-gray-700">
                {tier
                    .features
                    .into_iter()
                    .map(|f| view! { <li>"• " {f}</li> })
                    .collect_view()}
            </ul>
            <Button class="mt-8 px-5 py-3">"Get started"</Button>
        </Card>
    }
}
