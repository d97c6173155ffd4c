//! Task schema and derived views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backoffice_core::{record_id_newtype, EntitySchema, EntityStore, Record, RecordId};

/// Task identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub RecordId);

record_id_newtype!(TaskId);

/// Task workflow status.
///
/// A plain settable field; transitions are unconstrained user input, so any
/// value may be set at any time in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// Schema fields of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update of a task: every field optional.
///
/// `assigned_to` and `due_date` are doubly optional so a patch can clear them
/// with `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDate>>,
}

/// Schema marker for the task store.
#[derive(Debug)]
pub enum Tasks {}

impl EntitySchema for Tasks {
    type Id = TaskId;
    type Fields = TaskFields;
    type Patch = TaskPatch;

    const KIND: &'static str = "task";

    fn apply_patch(fields: &mut TaskFields, patch: TaskPatch) {
        if let Some(title) = patch.title {
            fields.title = title;
        }
        if let Some(description) = patch.description {
            fields.description = description;
        }
        if let Some(status) = patch.status {
            fields.status = status;
        }
        if let Some(priority) = patch.priority {
            fields.priority = priority;
        }
        if let Some(assigned_to) = patch.assigned_to {
            fields.assigned_to = assigned_to;
        }
        if let Some(due_date) = patch.due_date {
            fields.due_date = due_date;
        }
    }
}

pub type TaskStore = EntityStore<Tasks>;
pub type TaskRecord = Record<Tasks>;

/// Tasks with the given status, in insertion order (one board column).
pub fn tasks_with_status(store: &TaskStore, status: TaskStatus) -> Vec<TaskRecord> {
    store.query(|record| record.fields().status == status)
}

/// Dashboard summary of the task board: one count per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn summary(store: &TaskStore) -> TaskSummary {
    let mut summary = TaskSummary {
        pending: 0,
        in_progress: 0,
        completed: 0,
    };
    for record in store.records() {
        match record.fields().status {
            TaskStatus::Pending => summary.pending += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => summary.completed += 1,
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_tasks;

    use std::sync::Arc;

    use backoffice_core::{FixedClock, SystemClock};
    use chrono::{Duration, TimeZone, Utc};

    fn seeded_store() -> TaskStore {
        TaskStore::with_seed(Arc::new(SystemClock), seed_tasks())
    }

    #[test]
    fn completing_a_task_changes_only_status_and_updated_at() {
        let start = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::at(start));
        let mut store = TaskStore::with_seed(clock.clone(), seed_tasks());

        let id = tasks_with_status(&store, TaskStatus::Pending)[0].id();
        let before = store.get(id).unwrap().clone();

        clock.advance(Duration::minutes(30));
        store.update(
            id,
            TaskPatch {
                status: Some(TaskStatus::Completed),
                ..TaskPatch::default()
            },
        );

        let after = store.get(id).unwrap();
        assert_eq!(after.fields().status, TaskStatus::Completed);
        assert_eq!(after.fields().title, before.fields().title);
        assert_eq!(after.fields().priority, before.fields().priority);
        assert_eq!(after.fields().assigned_to, before.fields().assigned_to);
        assert_eq!(after.fields().due_date, before.fields().due_date);
        assert_eq!(after.created_at(), before.created_at());
        assert_eq!(after.updated_at(), start + Duration::minutes(30));
    }

    #[test]
    fn status_may_move_in_any_order() {
        let mut store = seeded_store();
        let id = tasks_with_status(&store, TaskStatus::Completed)[0].id();

        // No transition discipline: completed can go straight back to pending.
        store.update(
            id,
            TaskPatch {
                status: Some(TaskStatus::Pending),
                ..TaskPatch::default()
            },
        );
        assert_eq!(store.get(id).unwrap().fields().status, TaskStatus::Pending);
    }

    #[test]
    fn board_columns_partition_the_seed() {
        let store = seeded_store();

        assert_eq!(tasks_with_status(&store, TaskStatus::Pending).len(), 1);
        assert_eq!(tasks_with_status(&store, TaskStatus::InProgress).len(), 1);
        assert_eq!(tasks_with_status(&store, TaskStatus::Completed).len(), 1);

        let summary = summary(&store);
        assert_eq!(
            summary,
            TaskSummary {
                pending: 1,
                in_progress: 1,
                completed: 1,
            }
        );
    }

    #[test]
    fn seed_carries_the_sample_values() {
        let tasks = seed_tasks();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Setup project structure");
        assert_eq!(
            tasks[0].description,
            "Initialize Next.js project with TypeScript and Tailwind CSS"
        );
        assert_eq!(tasks[0].status, TaskStatus::Completed);
        assert_eq!(tasks[2].priority, TaskPriority::Medium);
    }

    #[test]
    fn unassigning_uses_the_double_option() {
        let mut store = seeded_store();
        let id = store.records()[0].id();
        assert!(store.get(id).unwrap().fields().assigned_to.is_some());

        store.update(
            id,
            TaskPatch {
                assigned_to: Some(None),
                ..TaskPatch::default()
            },
        );
        assert!(store.get(id).unwrap().fields().assigned_to.is_none());
    }
}
