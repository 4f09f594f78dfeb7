//! Not Found Page
//!
//! 404 panel with the floating decorations, staggered by index.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::nav::Page;

const FLOATERS: &[&str] = &["📋", "✅", "📊", "🗂", "⏰", "📌"];

/// Stagger between consecutive floating elements, seconds
const FLOAT_STAGGER_S: f64 = 0.5;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Navbar current=Page::NotFound />
        <div class="floating-elements">
            {FLOATERS.iter().enumerate().map(|(index, glyph)| view! {
                <span
                    class="floating-element"
                    style=format!("animation-delay: {}s", index as f64 * FLOAT_STAGGER_S)
                >
                    {*glyph}
                </span>
            }).collect_view()}
        </div>
        <main class="error-panel">
            <h1>"404"</h1>
            <p>"The page you are looking for drifted away."</p>
            <a href="index.html" class="btn btn-primary">"Back Home"</a>
        </main>
    }
}
