//! Password Field Component
//!
//! Password input with a visibility toggle.

use leptos::prelude::*;

#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into, optional)] placeholder: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    /// Flashes the demo-fill highlight while true
    #[prop(into, optional)]
    highlight: Option<ReadSignal<bool>>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    let input_class = move || {
        if highlight.map(|flash| flash.get()).unwrap_or(false) {
            "form-control demo-filled"
        } else {
            "form-control"
        }
    };

    view! {
        <div class="password-field">
            <input
                id=id.clone()
                class=input_class
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder.clone()
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <button
                type="button"
                class="password-toggle"
                on:click=move |_| set_visible.update(|shown| *shown = !*shown)
            >
                <i class=move || if visible.get() { "bi bi-eye-slash" } else { "bi bi-eye" }></i>
            </button>
        </div>
    }
}
