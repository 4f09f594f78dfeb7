//! Top Navbar Component
//!
//! Navigation bar for the public pages, with active-link highlighting and
//! the solid background swap once the page scrolls.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::nav::{self, Page, SCROLLED_NAV_OFFSET};

const NAV_LINKS: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("login.html", "Login"),
    ("register.html", "Register"),
    ("contact.html", "Contact"),
];

#[component]
pub fn Navbar(current: Page) -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);

    let on_scroll = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let offset = window().scroll_y().unwrap_or(0.0);
        set_scrolled.set(offset > SCROLLED_NAV_OFFSET);
    });
    let _ = window()
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();

    view! {
        <nav class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <a class="navbar-brand" href="index.html">"TMS"</a>
            <div class="navbar-links">
                {NAV_LINKS.iter().map(|(href, label)| {
                    let class = if nav::is_active(href, current) {
                        "nav-link active"
                    } else {
                        "nav-link"
                    };
                    view! { <a class=class href=*href>{*label}</a> }
                }).collect_view()}
            </div>
        </nav>
    }
}
