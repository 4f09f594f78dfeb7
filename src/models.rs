//! Demo Data
//!
//! Fixed records that stand in for a backend. Nothing here survives a
//! reload.

/// Fixture backing the edit-task form. Looked up by id, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTask {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
    pub status: &'static str,
    pub due_date: &'static str,
    pub assignee: &'static str,
}

/// Ids of the seeded task cards, in display order
pub const SAMPLE_TASK_IDS: &[&str] = &["task1", "task2"];

/// Sample task fixture for an id, `None` for anything unknown
pub fn sample_task(task_id: &str) -> Option<SampleTask> {
    match task_id {
        "task1" => Some(SampleTask {
            title: "Setup React Project",
            description: "Initialize new React project with Vite and configure basic setup",
            priority: "high",
            status: "pending",
            due_date: "2024-12-15",
            assignee: "john",
        }),
        "task2" => Some(SampleTask {
            title: "Design UI Components",
            description: "Create reusable UI components for the application",
            priority: "medium",
            status: "pending",
            due_date: "2024-12-18",
            assignee: "jane",
        }),
        _ => None,
    }
}

/// Per-workspace counters shown on the dashboard cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkspaceStats {
    pub tasks: u32,
    pub pending: u32,
    pub progress: u32,
    pub done: u32,
}

/// One card in the dashboard workspace grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub stats: WorkspaceStats,
    pub progress_pct: u32,
}

impl WorkspaceCard {
    /// A freshly created workspace: zeroed counters, placeholder blurb
    pub fn new(name: &str) -> Self {
        Self {
            id: slug(name),
            name: name.to_string(),
            description: "New workspace".to_string(),
            stats: WorkspaceStats::default(),
            progress_pct: 0,
        }
    }

    pub fn seeded(
        name: &str,
        description: &str,
        stats: WorkspaceStats,
        progress_pct: u32,
    ) -> Self {
        Self {
            id: slug(name),
            name: name.to_string(),
            description: description.to_string(),
            stats,
            progress_pct,
        }
    }
}

/// One card in the workspace task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub assignee: String,
}

impl TaskCard {
    pub fn from_sample(id: &str, sample: &SampleTask) -> Self {
        Self {
            id: id.to_string(),
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            priority: sample.priority.to_string(),
            status: sample.status.to_string(),
            due_date: sample.due_date.to_string(),
            assignee: sample.assignee.to_string(),
        }
    }
}

/// Lowercased, dash-separated id derived from a display name
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_task_lookup() {
        let task = sample_task("task1").unwrap();
        assert_eq!(task.title, "Setup React Project");
        assert_eq!(task.priority, "high");

        assert!(sample_task("task99").is_none());
    }

    #[test]
    fn test_all_sample_ids_resolve() {
        for id in SAMPLE_TASK_IDS {
            assert!(sample_task(id).is_some(), "missing fixture for {id}");
        }
    }

    #[test]
    fn test_new_workspace_card_starts_at_zero() {
        let card = WorkspaceCard::new("Research");
        assert_eq!(card.name, "Research");
        assert_eq!(card.description, "New workspace");
        assert_eq!(card.stats, WorkspaceStats::default());
        assert_eq!(card.progress_pct, 0);
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Research"), "research");
        assert_eq!(slug("Website  Redesign"), "website-redesign");
    }
}
