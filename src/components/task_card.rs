//! Task Card Component
//!
//! One row in the workspace task list, with edit and inline delete.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::DeleteConfirm;
use crate::context::UiContext;
use crate::dialog;
use crate::models::TaskCard;
use crate::store::{store_remove_task, use_app_store};
use crate::submit::{EXIT_ANIM_MS, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;

#[component]
pub fn TaskCardView(
    card: TaskCard,
    #[prop(into)] on_edit: Callback<String>,
) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");
    let store = use_app_store();
    let (leaving, set_leaving) = signal(false);

    let edit_id = card.id.clone();
    let edit = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        on_edit.run(edit_id.clone());
        dialog::show(dialog::EDIT_TASK_DIALOG);
    };

    let delete_id = card.id.clone();
    let confirm_delete = Callback::new(move |_| {
        ui.notify("Task deleted successfully!", ToastKind::Success);
        let task_id = delete_id.clone();
        spawn_local(async move {
            TimeoutFuture::new(FOLLOW_UP_DELAY_MS).await;
            set_leaving.set(true);
            TimeoutFuture::new(EXIT_ANIM_MS).await;
            store_remove_task(&store, &task_id);
        });
    });

    view! {
        <div class=move || if leaving.get() { "task-card fade-out" } else { "task-card" }>
            <div class="task-card-main">
                <div class="task-title">{card.title.clone()}</div>
                <div class="task-description">{card.description.clone()}</div>
                <div class="task-meta">
                    <span class=format!("task-priority priority-{}", card.priority)>
                        {card.priority.clone()}
                    </span>
                    <span class=format!("task-status status-{}", card.status)>
                        {card.status.clone()}
                    </span>
                    <span class="task-due">
                        <i class="bi bi-calendar"></i>
                        {card.due_date.clone()}
                    </span>
                    <span class="task-assignee">
                        <i class="bi bi-person"></i>
                        {card.assignee.clone()}
                    </span>
                </div>
            </div>
            <div class="task-actions">
                <button class="btn-icon btn-edit" on:click=edit>
                    <i class="bi bi-pencil"></i>
                </button>
                <DeleteConfirm button_class="btn-icon btn-delete" on_confirm=confirm_delete />
            </div>
        </div>
    }
}
