//! Registration Page
//!
//! Simulated sign-up with password rules, then a redirect to login.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Navbar, PasswordField};
use crate::context::UiContext;
use crate::nav::Page;
use crate::submit::{redirect_after, SimulatedRequest, AUTH_DELAY_MS, REDIRECT_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let check = validate::registration(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
        );
        if let Err(err) = check {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(AUTH_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify(
                        "Account created successfully! Redirecting to login...",
                        ToastKind::Success,
                    );
                    redirect_after(Page::Login, REDIRECT_DELAY_MS).await;
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <Navbar current=Page::Register />
        <main class="auth-panel">
            <h1>"Create your account"</h1>
            <form id="registerForm" on:submit=on_submit>
                <label class="form-label" for="fullName">"Full name"</label>
                <input
                    id="fullName"
                    class="form-control"
                    type="text"
                    placeholder="Ada Lovelace"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    class="form-control"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label" for="password">"Password"</label>
                <PasswordField
                    id="password"
                    placeholder="At least 8 characters"
                    value=password
                    set_value=set_password
                />

                <label class="form-label" for="confirmPassword">"Confirm password"</label>
                <PasswordField
                    id="confirmPassword"
                    placeholder="Repeat the password"
                    value=confirm
                    set_value=set_confirm
                />

                <button type="submit" class="btn btn-primary">
                    <Show when=move || !pending.get()>
                        <span class="register-text">"Create Account"</span>
                    </Show>
                    <Show when=move || pending.get()>
                        <span class="loading">
                            <span class="spinner"></span>
                            " Creating account..."
                        </span>
                    </Show>
                </button>
            </form>

            <p class="auth-switch">
                "Already registered? "
                <a href="login.html">"Sign in"</a>
            </p>
        </main>
    }
}
