//! Task entity kind: task schema, derived views, and seed data.

pub mod seed;
pub mod task;

pub use seed::seed_tasks;
pub use task::{
    summary, tasks_with_status, TaskFields, TaskId, TaskPatch, TaskPriority, TaskRecord,
    TaskStatus, TaskStore, TaskSummary, Tasks,
};
