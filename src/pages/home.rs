//! Landing Page
//!
//! Hero plus the card sections that reveal as they scroll into view.

use leptos::prelude::*;

use crate::components::Navbar;
use crate::nav::Page;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "bi bi-kanban",
        "Organize Work",
        "Group tasks into workspaces and keep every project on track.",
    ),
    (
        "bi bi-people",
        "Collaborate",
        "Assign tasks to teammates and follow progress together.",
    ),
    (
        "bi bi-bell",
        "Stay Notified",
        "Instant feedback for every action, right where you work.",
    ),
    (
        "bi bi-bar-chart",
        "Track Progress",
        "Per-workspace counters show what is pending, active, and done.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("12k+", "Tasks tracked"),
    ("850", "Active teams"),
    ("99.9%", "Uptime"),
];

const TECH: &[(&str, &str)] = &[
    ("Rust + WebAssembly", "The whole front end compiles to WASM."),
    ("Leptos", "Fine-grained reactive rendering, no virtual DOM."),
    ("Zero backend", "Demo data lives in the page and resets on reload."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar current=Page::Home />
        <header class="hero">
            <h1>"Manage tasks without the clutter"</h1>
            <p class="hero-lead">
                "TMS keeps workspaces, tasks, and teammates in one place."
            </p>
            <a href="register.html" class="btn btn-primary">"Get Started"</a>
            <a href="login.html" class="btn btn-outline">"Sign In"</a>
        </header>

        <section class="features">
            <h2>"Why TMS"</h2>
            <div class="card-grid">
                {FEATURES.iter().map(|(icon, title, blurb)| view! {
                    <div class="feature-card">
                        <i class=*icon></i>
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="stats">
            <div class="card-grid">
                {STATS.iter().map(|(number, label)| view! {
                    <div class="stat-card">
                        <div class="stat-number">{*number}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="tech">
            <h2>"Under the hood"</h2>
            <div class="card-grid">
                {TECH.iter().map(|(title, blurb)| view! {
                    <div class="tech-card">
                        <h3>{*title}</h3>
                        <p>{*blurb}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
