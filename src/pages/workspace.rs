//! Workspace Page
//!
//! Task list plus the add/edit task dialogs. The edit form pre-fills from
//! the fixed sample-task fixtures.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DialogShell, Sidebar, TaskCardView};
use crate::context::UiContext;
use crate::dialog;
use crate::models::sample_task;
use crate::nav::Page;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::submit::{SimulatedRequest, FOLLOW_UP_DELAY_MS};
use crate::toast::ToastKind;
use crate::validate;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let store = use_app_store();
    let (editing, set_editing) = signal::<Option<String>>(None);

    view! {
        <Sidebar current=Page::Workspace />
        <main class="page-body">
            <header class="page-header">
                <h1>"Website Redesign"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| dialog::show(dialog::ADD_TASK_DIALOG)
                >
                    <i class="bi bi-plus-lg"></i>
                    " Add Task"
                </button>
            </header>

            <div class="task-list">
                <For
                    each=move || store.tasks().get()
                    key=|card| card.id.clone()
                    children=move |card| {
                        view! {
                            <TaskCardView
                                card=card
                                on_edit=move |task_id: String| set_editing.set(Some(task_id))
                            />
                        }
                    }
                />
            </div>
        </main>

        <AddTaskDialog />
        <EditTaskDialog editing=editing />
    }
}

#[component]
fn AddTaskDialog() -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(String::from("medium"));
    let (status, set_status) = signal(String::from("pending"));
    let (due_date, set_due_date) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = title.get();
        if let Err(err) = validate::task_title(&task) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify(
                        format!("Task \"{task}\" created successfully!"),
                        ToastKind::Success,
                    );
                    dialog::hide(dialog::ADD_TASK_DIALOG);
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <DialogShell id=dialog::ADD_TASK_DIALOG title="Add Task">
            <form id="addTaskForm" on:submit=on_submit>
                <label class="form-label" for="taskTitle">"Title"</label>
                <input
                    id="taskTitle"
                    class="form-control"
                    type="text"
                    placeholder="What needs doing?"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label class="form-label" for="taskDescription">"Description"</label>
                <textarea
                    id="taskDescription"
                    class="form-control"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <div class="form-row">
                    <div>
                        <label class="form-label" for="taskPriority">"Priority"</label>
                        <select
                            id="taskPriority"
                            class="form-control"
                            prop:value=move || priority.get()
                            on:change=move |ev| set_priority.set(event_target_value(&ev))
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </div>
                    <div>
                        <label class="form-label" for="taskStatus">"Status"</label>
                        <select
                            id="taskStatus"
                            class="form-control"
                            prop:value=move || status.get()
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                        >
                            <option value="pending">"Pending"</option>
                            <option value="progress">"In Progress"</option>
                            <option value="done">"Done"</option>
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div>
                        <label class="form-label" for="taskDueDate">"Due date"</label>
                        <input
                            id="taskDueDate"
                            class="form-control"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="form-label" for="taskAssignee">"Assignee"</label>
                        <input
                            id="taskAssignee"
                            class="form-control"
                            type="text"
                            prop:value=move || assignee.get()
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| dialog::hide(dialog::ADD_TASK_DIALOG)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">
                        <Show when=move || !pending.get()>
                            <span class="submit-text">"Create Task"</span>
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
fn EditTaskDialog(editing: ReadSignal<Option<String>>) -> impl IntoView {
    let ui = use_context::<UiContext>().expect("UiContext should be provided");

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (priority, set_priority) = signal(String::from("medium"));
    let (status, set_status) = signal(String::from("pending"));
    let (due_date, set_due_date) = signal(String::new());
    let (assignee, set_assignee) = signal(String::new());
    let (pending, set_pending) = signal(false);

    // Pre-fill from the fixture; the fixture itself is never written back
    Effect::new(move |_| {
        let Some(task_id) = editing.get() else {
            return;
        };
        if let Some(sample) = sample_task(&task_id) {
            set_title.set(sample.title.to_string());
            set_description.set(sample.description.to_string());
            set_priority.set(sample.priority.to_string());
            set_status.set(sample.status.to_string());
            set_due_date.set(sample.due_date.to_string());
            set_assignee.set(sample.assignee.to_string());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = validate::task_title(&title.get()) {
            ui.notify(err.to_string(), ToastKind::Error);
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            match SimulatedRequest::new(FOLLOW_UP_DELAY_MS).send().await {
                Ok(()) => {
                    set_pending.set(false);
                    ui.notify("Task updated successfully!", ToastKind::Success);
                    dialog::hide(dialog::EDIT_TASK_DIALOG);
                }
                Err(err) => {
                    set_pending.set(false);
                    ui.notify(err.to_string(), ToastKind::Error);
                }
            }
        });
    };

    view! {
        <DialogShell id=dialog::EDIT_TASK_DIALOG title="Edit Task">
            <form id="editTaskForm" on:submit=on_submit>
                <label class="form-label" for="editTaskTitle">"Title"</label>
                <input
                    id="editTaskTitle"
                    class="form-control"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />

                <label class="form-label" for="editTaskDescription">"Description"</label>
                <textarea
                    id="editTaskDescription"
                    class="form-control"
                    rows="3"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>

                <div class="form-row">
                    <div>
                        <label class="form-label" for="editTaskPriority">"Priority"</label>
                        <select
                            id="editTaskPriority"
                            class="form-control"
                            prop:value=move || priority.get()
                            on:change=move |ev| set_priority.set(event_target_value(&ev))
                        >
                            <option value="low">"Low"</option>
                            <option value="medium">"Medium"</option>
                            <option value="high">"High"</option>
                        </select>
                    </div>
                    <div>
                        <label class="form-label" for="editTaskStatus">"Status"</label>
                        <select
                            id="editTaskStatus"
                            class="form-control"
                            prop:value=move || status.get()
                            on:change=move |ev| set_status.set(event_target_value(&ev))
                        >
                            <option value="pending">"Pending"</option>
                            <option value="progress">"In Progress"</option>
                            <option value="done">"Done"</option>
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div>
                        <label class="form-label" for="editTaskDueDate">"Due date"</label>
                        <input
                            id="editTaskDueDate"
                            class="form-control"
                            type="date"
                            prop:value=move || due_date.get()
                            on:input=move |ev| set_due_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="form-label" for="editTaskAssignee">"Assignee"</label>
                        <input
                            id="editTaskAssignee"
                            class="form-control"
                            type="text"
                            prop:value=move || assignee.get()
                            on:input=move |ev| set_assignee.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| dialog::hide(dialog::EDIT_TASK_DIALOG)
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
