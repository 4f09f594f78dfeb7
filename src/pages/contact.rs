//! Contact Page
//!
//! The one form that stays on its page: success clears the fields instead
//! of navigating.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Navbar;
use crate::context::UiContext;
use crate::nav::Page;
use crate::submit::{SimulatedRequest, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

#[component]
pub fn ContactPage() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let check = validate::contact(
            &first_name.get(),
            &last_name.get(),
            &email.get(),
            &subject.get(),
            &message.get(),
        );
        if let Err(err) = check {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify(
                        "Message sent successfully! We'll get back to you soon.",
                        ToastKind::Success,
                    );
                    set_first_name.set(String::new());
                    set_last_name.set(String::new());
                    set_email.set(String::new());
                    set_subject.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <Navbar current=Page::Contact />
        <main class="contact-panel">
            <h1>"Get in touch"</h1>
            <form id="contactForm" on:submit=on_submit>
                <div class="form-row">
                    <div>
                        <label class="form-label" for="firstName">"First name"</label>
                        <input
                            id="firstName"
                            class="form-control"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="form-label" for="lastName">"Last name"</label>
                        <input
                            id="lastName"
                            class="form-control"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    class="form-control"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label" for="subject">"Subject"</label>
                <input
                    id="subject"
                    class="form-control"
                    type="text"
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />

                <label class="form-label" for="message">"Message"</label>
                <textarea
                    id="message"
                    class="form-control"
                    rows="5"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>

                <button type="submit" class="btn btn-primary">
                    <Show when=move || !pending.get()>
                        <span class="submit-text">"Send Message"</span>
                    </Show>
                    <Show when=move || pending.get()>
                        <span class="loading">
                            <span class="spinner"></span>
                            " Sending..."
                        </span>
                    </Show>
                </button>
            </form>
        </main>
    }
}
