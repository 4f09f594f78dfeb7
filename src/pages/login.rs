//! Login Page
//!
//! Simulated sign-in: validation, fake round trip, redirect to the
//! dashboard. Demo credential buttons pre-fill the form.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Navbar, PasswordField};
use crate::context::UiContext;
use crate::nav::Page;
use crate::submit::{redirect_after, SimulatedRequest, AUTH_DELAY_MS, REDIRECT_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

/// How long the demo-fill highlight stays on the inputs
const DEMO_FLASH_MS: u32 = 2000;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pending, set_pending) = signal(false);
    let (flash, set_flash) = signal(false);

    let fill_demo = move |demo_email: &'static str, demo_password: &'static str| {
        set_email.set(demo_email.to_string());
        set_password.set(demo_password.to_string());
        set_flash.set(true);
        spawn_local(async move {
            TimeoutFuture::new(DEMO_FLASH_MS).await;
            set_flash.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = validate::login(&email.get(), &password.get()) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(AUTH_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify("Login successful! Redirecting...", ToastKind::Success);
                    redirect_after(Page::Dashboard, REDIRECT_DELAY_MS).await;
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <Navbar current=Page::Login />
        <main class="auth-panel">
            <h1>"Welcome back"</h1>
            <form id="loginForm" on:submit=on_submit>
                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    class=move || if flash.get() { "form-control demo-filled" } else { "form-control" }
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label" for="password">"Password"</label>
                <PasswordField
                    id="password"
                    placeholder="Your password"
                    value=password
                    set_value=set_password
                    highlight=flash
                />

                <button type="submit" class="btn btn-primary">
                    <Show when=move || !pending.get()>
                        <span class="login-text">"Sign In"</span>
                    </Show>
                    <Show when=move || pending.get()>
                        <span class="loading">
                            <span class="spinner"></span>
                            " Signing in..."
                        </span>
                    </Show>
                </button>
            </form>

            <div class="demo-credentials">
                <span>"Try a demo account:"</span>
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| fill_demo("admin@tms.com", "admin123")
                >
                    "Admin"
                </button>
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| fill_demo("user@tms.com", "user123")
                >
                    "User"
                </button>
            </div>

            <p class="auth-switch">
                "No account yet? "
                <a href="register.html">"Register"</a>
            </p>
        </main>
    }
}
