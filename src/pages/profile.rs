//! Profile Page
//!
//! Account summary plus the edit-profile dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DialogShell, Sidebar};
use crate::context::UiContext;
use crate::dialog;
use crate::nav::Page;
use crate::submit::{SimulatedRequest, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <Sidebar current=Page::Profile />
        <main class="page-body">
            <header class="page-header">
                <h1>"Profile"</h1>
            </header>

            <div class="profile-card">
                <div class="profile-avatar">"JD"</div>
                <div class="profile-summary">
                    <h2>"John Doe"</h2>
                    <p class="profile-role">"Product Manager"</p>
                    <p class="profile-email">"john.doe@tms.com"</p>
                </div>
                <button
                    class="btn btn-primary"
                    on:click=move |_| dialog::show(dialog::EDIT_PROFILE_DIALOG)
                >
                    <i class="bi bi-pencil"></i>
                    " Edit Profile"
                </button>
            </div>
        </main>

        <EditProfileDialog />
    }
}

#[component]
fn EditProfileDialog() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (first_name, set_first_name) = signal(String::from("John"));
    let (last_name, set_last_name) = signal(String::from("Doe"));
    let (email, set_email) = signal(String::from("john.doe@tms.com"));
    let (bio, set_bio) = signal(String::from("Shipping the roadmap, one task at a time."));
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = validate::profile(&first_name.get(), &last_name.get()) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify("Profile updated successfully!", ToastKind::Success);
                    dialog::hide(dialog::EDIT_PROFILE_DIALOG);
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <DialogShell id=dialog::EDIT_PROFILE_DIALOG title="Edit Profile">
            <form id="editProfileForm" on:submit=on_submit>
                <div class="form-row">
                    <div>
                        <label class="form-label" for="editFirstName">"First name"</label>
                        <input
                            id="editFirstName"
                            class="form-control"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="form-label" for="editLastName">"Last name"</label>
                        <input
                            id="editLastName"
                            class="form-control"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| set_last_name.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <label class="form-label" for="editEmail">"Email"</label>
                <input
                    id="editEmail"
                    class="form-control"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />

                <label class="form-label" for="editBio">"Bio"</label>
                <textarea
                    id="editBio"
                    class="form-control"
                    rows="3"
                    prop:value=move || bio.get()
                    on:input=move |ev| set_bio.set(event_target_value(&ev))
                ></textarea>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| dialog::hide(dialog::EDIT_PROFILE_DIALOG)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        <Show when=move || !pending.get()>
                            <span class="submit-text">"Save Changes"</span>
                        </Show>
                        <Show when=move || pending.get()>
                            <span class="loading">
                                <span class="spinner"></span>
                                " Saving..."
                            </span>
                        </Show>
                    </button>
                </div>
            </form>
        </DialogShell>
    }
}
