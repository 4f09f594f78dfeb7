//! TMS Frontend App
//!
//! Root component: wires up shared state, the dialog coordinator, and the
//! page view selected from the browser location.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ToastHost;
use crate::context::UiContext;
use crate::dialog;
use crate::nav::{self, Page};
use crate::observe;
use crate::overlay::OverlayState;
use crate::pages::{
    ContactPage, DashboardPage, HomePage, LoginPage, NotFoundPage, ProfilePage, RegisterPage,
    WorkspacePage,
};
use crate::store::AppState;
use crate::toast::ToastState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let overlay = signal(OverlayState::default());
    let toast = signal(ToastState::default());
    let workspace_form_reset = signal(0u32);

    // Provide context to all children
    let ui = UiContext::new(overlay, toast, workspace_form_reset);
    provide_context(ui);
    provide_context(Store::new(AppState::seeded()));

    // Each page is a separate document; the path decides what to render
    let page = nav::current_page();
    web_sys::console::log_1(&format!("[App] rendering {page:?}").into());

    dialog::install_coordinator(ui);

    // Single writer for the body scroll lock
    Effect::new(move |_| {
        let locked = ui.overlay.get().scroll_locked;
        if let Some(body) = document().body() {
            let value = if locked { "hidden" } else { "" };
            let _ = body.style().set_property("overflow", value);
        }
    });

    // Reveal targets exist only once the page view has rendered
    Effect::new(move |_| {
        observe::reveal_on_scroll();
    });

    view! {
        <ToastHost />
        {match page {
            Page::Home => view! { <HomePage /> }.into_any(),
            Page::Login => view! { <LoginPage /> }.into_any(),
            Page::Register => view! { <RegisterPage /> }.into_any(),
            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
            Page::Workspace => view! { <WorkspacePage /> }.into_any(),
            Page::Profile => view! { <ProfilePage /> }.into_any(),
            Page::Contact => view! { <ContactPage /> }.into_any(),
            Page::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
