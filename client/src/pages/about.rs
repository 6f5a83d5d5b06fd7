//! Static "About" page.

use leptos::prelude::*;

const MISSION: [&str; 4] = [
    "Transform waste into beautiful art",
    "Empower local artisan communities",
    "Promote sustainable living",
    "Preserve Balinese cultural heritage",
];

const VISION: [&str; 4] = [
    "Lead the eco-art movement globally",
    "Zero-waste production by 2030",
    "Expand artisan network across Indonesia",
    "Inspire 1 million people to recycle creatively",
];

fn bullet_list(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <ul class="checklist">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page-header">
            <h1>"Crafting Beauty From Waste"</h1>
            <p>
                "Henart Design is a Bali-based creative studio that transforms discarded materials into "
                "eco-friendly art pieces, handcrafted by skilled local artisans."
            </p>
            <div class="page-header__actions">
                <a class="button" href="/products">"Explore Products"</a>
                <a class="button button--outline" href="/contact">"Get in Touch"</a>
            </div>
        </section>
        <section class="section two-column">
            <div>
                <h2>"Our Mission"</h2>
                <p>"Reduce waste and promote sustainability through creative design."</p>
                {bullet_list(&MISSION)}
            </div>
            <div>
                <h2>"Our Vision"</h2>
                <p>"A world where sustainability and beauty coexist, and every piece of waste can become a masterpiece."</p>
                {bullet_list(&VISION)}
            </div>
        </section>
    }
}
