//! Workspace Card Component
//!
//! One card in the dashboard grid. Clicking the card opens the workspace;
//! the action buttons edit or delete it without triggering the open.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirm;
use crate::context::UiContext;
use crate::dialog;
use crate::models::WorkspaceCard;
use crate::nav::Page;
use crate::store::{store_remove_workspace, use_app_store};
use crate::submit::{redirect_after, EXIT_ANIM_MS, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;

#[component]
pub fn WorkspaceCardView(
    card: WorkspaceCard,
    #[prop(into)] on_edit: Callback<WorkspaceCard>,
) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_app_store();
    let (leaving, set_leaving) = signal(false);

    let open_workspace = move |_| {
        ui.notify("Opening workspace...", ToastKind::Info);
        spawn_local(async move {
            redirect_after(Page::Workspace, FOLLOW_UP_DELAY_MS).await;
        });
    };

    let edit_card = card.clone();
    let edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_edit.run(edit_card.clone());
        dialog::show(dialog::EDIT_WORKSPACE_DIALOG);
    };

    let delete_id = card.id.clone();
    let confirm_delete = Callback::new(move |_| {
        ui.notify("Workspace deleted successfully!", ToastKind::Success);
        let workspace_id = delete_id.clone();
        spawn_local(async move {
            TimeoutFuture::new(FOLLOW_UP_DELAY_MS).await;
            set_leaving.set(true);
            TimeoutFuture::new(EXIT_ANIM_MS).await;
            store_remove_workspace(&store, &workspace_id);
        });
    });

    view! {
        <div
            class=move || {
                if leaving.get() {
                    "workspace-card-dash fade-out"
                } else {
                    "workspace-card-dash"
                }
            }
            on:click=open_workspace
        >
            <div class="workspace-header">
                <div>
                    <div class="workspace-title">{card.name.clone()}</div>
                    <div class="workspace-description">{card.description.clone()}</div>
                </div>
                <div
                    class="workspace-actions"
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <button class="btn-icon btn-edit" on:click=edit>
                        <i class="bi bi-pencil"></i>
                    </button>
                    <DeleteConfirm button_class="btn-icon btn-delete" on_confirm=confirm_delete />
                </div>
            </div>
            <div class="workspace-stats">
                <div class="stat-item">
                    <div class="stat-number">{card.stats.tasks}</div>
                    <div class="stat-label">"Tasks"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number">{card.stats.pending}</div>
                    <div class="stat-label">"Pending"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number">{card.stats.progress}</div>
                    <div class="stat-label">"Progress"</div>
                </div>
                <div class="stat-item">
                    <div class="stat-number">{card.stats.done}</div>
                    <div class="stat-label">"Done"</div>
                </div>
            </div>
            <div class="progress-bar-custom">
                <div class="progress-fill" style=format!("width: {}%", card.progress_pct)></div>
            </div>
        </div>
    }
}
