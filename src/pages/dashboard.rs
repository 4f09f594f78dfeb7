//! Dashboard Page
//!
//! Workspace grid plus the add/edit workspace dialogs. The add form clears
//! itself whenever its dialog closes, via the context reset trigger.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{
    ColorPicker, DialogShell, Sidebar, WorkspaceCardView, WORKSPACE_COLORS,
};
use crate::context::UiContext;
use crate::dialog;
use crate::models::WorkspaceCard;
use crate::nav::Page;
use crate::store::{store_add_workspace, use_app_store, AppStateStoreFields};
use crate::submit::{SimulatedRequest, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let (editing, set_editing) = signal::<Option<WorkspaceCard>>(None);

    view! {
        <Sidebar current=Page::Dashboard />
        <main class="page-body">
            <header class="page-header">
                <h1>"Dashboard"</h1>
                <p>"Your workspaces at a glance."</p>
            </header>

            <div id="workspaceGrid" class="workspace-grid">
                <For
                    each=move || store.workspaces().get()
                    key=|card| card.id.clone()
                    children=move |card| {
                        view! {
                            <WorkspaceCardView
                                card=card
                                on_edit=move |card: WorkspaceCard| set_editing.set(Some(card))
                            />
                        }
                    }
                />
                // Trailing placeholder; new cards land right before it
                <button
                    class="add-workspace-card"
                    on:click=move |_| dialog::show(dialog::ADD_WORKSPACE_DIALOG)
                >
                    <i class="bi bi-plus-lg"></i>
                    <span>"Add Workspace"</span>
                </button>
            </div>
        </main>

        <AddWorkspaceDialog />
        <EditWorkspaceDialog editing=editing />
    }
}

#[component]
fn AddWorkspaceDialog() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (color, set_color) = signal(WORKSPACE_COLORS[0].to_string());
    let (pending, set_pending) = signal(false);

    // Clear the fields whenever the dialog finishes closing
    Effect::new(move |_| {
        let _ = ui.workspace_form_reset.get();
        set_name.set(String::new());
        set_description.set(String::new());
        set_color.set(WORKSPACE_COLORS[0].to_string());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let workspace = name.get();
        if let Err(err) = validate::workspace_name(&workspace) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify(
                        format!("Workspace \"{workspace}\" created successfully!"),
                        ToastKind::Success,
                    );
                    dialog::hide(dialog::ADD_WORKSPACE_DIALOG);
                    TimeoutFuture::new(FOLLOW_UP_DELAY_MS).await;
                    store_add_workspace(&store, WorkspaceCard::new(&workspace));
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <DialogShell id=dialog::ADD_WORKSPACE_DIALOG title="Add Workspace">
            <form id="addWorkspaceForm" on:submit=on_submit>
                <label class="form-label" for="workspaceName">"Name"</label>
                <input
                    id="workspaceName"
                    class="form-control"
                    type="text"
                    placeholder="Workspace name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label class="form-label" for="workspaceDescription">"Description"</label>
                <textarea
                    id="workspaceDescription"
                    class="form-control"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <label class="form-label">"Color"</label>
                <ColorPicker selected=color set_selected=set_color />

                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| dialog::hide(dialog::ADD_WORKSPACE_DIALOG)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        <Show when=move || !pending.get()>
                            <span class="submit-text">"Create Workspace"</span>
                        </Show>
                        <Show when=move || pending.get()>
                            <span class="loading">
                                <span class="spinner"></span>
                                " Creating..."
                            </span>
                        </Show>
                    </button>
                </div>
            </form>
        </DialogShell>
    }
}

#[component]
fn EditWorkspaceDialog(editing: ReadSignal<Option<WorkspaceCard>>) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (pending, set_pending) = signal(false);

    // Load the card under edit into the fields
    Effect::new(move |_| {
        if let Some(card) = editing.get() {
            set_name.set(card.name);
            set_description.set(card.description);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = validate::workspace_name(&name.get()) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify("Workspace updated successfully!", ToastKind::Success);
                    dialog::hide(dialog::EDIT_WORKSPACE_DIALOG);
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <DialogShell id=dialog::EDIT_WORKSPACE_DIALOG title="Edit Workspace">
            <form id="editWorkspaceForm" on:submit=on_submit>
                <label class="form-label" for="editWorkspaceName">"Name"</label>
                <input
                    id="editWorkspaceName"
                    class="form-control"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />

                <label class="form-label" for="editWorkspaceDescription">"Description"</label>
                <textarea
                    id="editWorkspaceDescription"
                    class="form-control"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| dialog::hide(dialog::EDIT_WORKSPACE_DIALOG)
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
