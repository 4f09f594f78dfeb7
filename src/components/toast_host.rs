//! Toast Host Component
//!
//! Renders the shared notification slot and schedules each toast's
//! auto-dismiss. Timers are not cancelled; a stale timer expires against a
//! sequence token that no longer matches.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::UiContext;
use crate::toast::TOAST_LIFETIME_MS;

/// Shared notification surface, at most one toast visible
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    // Schedule the auto-dismiss for every toast that enters the slot
    Effect::new(move |_| {
        if let Some(toast) = ui.toast.get().current().cloned() {
            spawn_local(async move {
                TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                ui.expire_toast(toast.seq);
            });
        }
    });

    view! {
        <div class="toast-container">
            {move || {
                ui.toast.get().current().cloned().map(|toast| {
                    let seq = toast.seq;
                    view! {
                        <div class="toast show">
                            <div class="toast-header">
                                <i class=format!(
                                    "bi bi-{} me-2 text-{}",
                                    toast.kind.icon(),
                                    toast.kind.color(),
                                )></i>
                                <strong class="me-auto">{toast.kind.title()}</strong>
                                <button
                                    type="button"
                                    class="btn-close"
                                    on:click=move |_| ui.expire_toast(seq)
                                ></button>
                            </div>
                            <div class="toast-body">{toast.message.clone()}</div>
                        </div>
                    }
                })
            }}
        </div>
    }
}
