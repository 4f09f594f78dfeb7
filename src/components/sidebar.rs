//! Mobile Sidebar Component
//!
//! Collapsible navigation drawer for the app pages. Pages without a drawer
//! never render this, so none of its listeners get installed there. Every
//! open/close runs through the overlay state in `UiContext`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::UiContext;
use crate::dialog;
use crate::nav::{self, Page};
use crate::submit::SIDEBAR_CLOSE_DELAY_MS;

const SIDEBAR_LINKS: &[(&str, &str, &str)] = &[
    ("dashboard.html", "bi bi-grid", "Dashboard"),
    ("workspace.html", "bi bi-kanban", "Workspace"),
    ("profile.html", "bi bi-person", "Profile"),
];

/// Dropdown entries; fragment hrefs open dialogs instead of navigating
const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("#addWorkspaceModal", "New Workspace"),
    ("#addTaskModal", "New Task"),
    ("contact.html", "Contact Support"),
];

#[component]
pub fn Sidebar(current: Page) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");
    let (dropdown_open, set_dropdown_open) = signal(false);

    let open = move || ui.overlay.get().sidebar_open;

    // Close once navigation had a chance to start
    let close_soon = move || {
        spawn_local(async move {
            TimeoutFuture::new(SIDEBAR_CLOSE_DELAY_MS).await;
            ui.close_sidebar();
        });
    };

    // Escape closes an open drawer
    let on_key =
        Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && ui.overlay.get_untracked().sidebar_open {
                ui.close_sidebar();
            }
        });
    let _ = document().add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref());
    on_key.forget();

    // Desktop widths force the drawer closed, whatever its state
    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let width = window()
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0);
        ui.viewport_resized(width);
    });
    let _ =
        window().add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    view! {
        <button
            id="mobileNavToggle"
            class="mobile-nav-toggle"
            aria-expanded=move || if open() { "true" } else { "false" }
            on:click=move |_| ui.toggle_sidebar()
        >
            <i class=move || if open() { "bi bi-x" } else { "bi bi-list" }></i>
        </button>

        <aside id="sidebar" class=move || if open() { "sidebar show" } else { "sidebar" }>
            <div class="sidebar-brand">"TMS"</div>
            <nav class="sidebar-nav">
                {SIDEBAR_LINKS.iter().map(|(href, icon, label)| {
                    let class = if nav::is_active(href, current) {
                        "nav-link active"
                    } else {
                        "nav-link"
                    };
                    view! {
                        <a class=class href=*href on:click=move |_| close_soon()>
                            <i class=*icon></i>
                            <span>{*label}</span>
                        </a>
                    }
                }).collect_view()}

                <div class="nav-dropdown">
                    <button
                        class="nav-link dropdown-toggle"
                        aria-expanded=move || if dropdown_open.get() { "true" } else { "false" }
                        on:click=move |ev: web_sys::MouseEvent| {
                            ev.stop_propagation();
                            set_dropdown_open.update(|open| *open = !*open);
                        }
                    >
                        <i class="bi bi-lightning"></i>
                        <span>"Quick Actions"</span>
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="dropdown-menu">
                            {QUICK_ACTIONS.iter().map(|(href, label)| {
                                view! {
                                    <a
                                        class="dropdown-item"
                                        href=*href
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            if nav::navigates_away(href) {
                                                close_soon();
                                            } else {
                                                ev.prevent_default();
                                                if let Some(id) = href.strip_prefix('#') {
                                                    dialog::show(id);
                                                }
                                            }
                                        }
                                    >
                                        {*label}
                                    </a>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>
            </nav>
        </aside>

        <div
            id="sidebarOverlay"
            class=move || if open() { "sidebar-overlay show" } else { "sidebar-overlay" }
            on:click=move |_| ui.close_sidebar()
        ></div>
    }
}
