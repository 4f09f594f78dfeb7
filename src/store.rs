//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the demo
//! records the page views render.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{sample_task, TaskCard, WorkspaceCard, WorkspaceStats, SAMPLE_TASK_IDS};

/// Demo records with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Cards in the dashboard workspace grid
    pub workspaces: Vec<WorkspaceCard>,
    /// Cards in the workspace task list
    pub tasks: Vec<TaskCard>,
}

impl AppState {
    /// Fixed demo records; recreated from scratch on every page load
    pub fn seeded() -> Self {
        Self {
            workspaces: vec![
                WorkspaceCard::seeded(
                    "Website Redesign",
                    "Marketing site refresh for the Q1 launch",
                    WorkspaceStats {
                        tasks: 12,
                        pending: 4,
                        progress: 3,
                        done: 5,
                    },
                    42,
                ),
                WorkspaceCard::seeded(
                    "Mobile App",
                    "Companion app for iOS and Android",
                    WorkspaceStats {
                        tasks: 8,
                        pending: 5,
                        progress: 2,
                        done: 1,
                    },
                    13,
                ),
            ],
            tasks: SAMPLE_TASK_IDS
                .iter()
                .filter_map(|id| sample_task(id).map(|sample| TaskCard::from_sample(id, &sample)))
                .collect(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a workspace card. The grid renders the add-workspace placeholder
/// after the list, so appending lands the card immediately before it.
pub fn store_add_workspace(store: &AppStore, card: WorkspaceCard) {
    store.workspaces().write().push(card);
}

/// Remove a workspace card by id
pub fn store_remove_workspace(store: &AppStore, workspace_id: &str) {
    store
        .workspaces()
        .write()
        .retain(|card| card.id != workspace_id);
}

/// Remove a task card by id
pub fn store_remove_task(store: &AppStore, task_id: &str) {
    store.tasks().write().retain(|card| card.id != task_id);
}
