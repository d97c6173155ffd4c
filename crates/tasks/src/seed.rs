//! Sample task records loaded at store construction.

use chrono::NaiveDate;

use crate::task::{TaskFields, TaskPriority, TaskStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Initial task board shown on first launch.
pub fn seed_tasks() -> Vec<TaskFields> {
    vec![
        TaskFields {
            title: "Setup project structure".to_string(),
            description: "Initialize Next.js project with TypeScript and Tailwind CSS".to_string(),
            status: TaskStatus::Completed,
            priority: TaskPriority::High,
            assigned_to: Some("John Doe".to_string()),
            due_date: Some(date(2024, 1, 15)),
        },
        TaskFields {
            title: "Implement user authentication".to_string(),
            description: "Add login and registration functionality".to_string(),
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            assigned_to: Some("Jane Smith".to_string()),
            due_date: Some(date(2024, 1, 20)),
        },
        TaskFields {
            title: "Design responsive layout".to_string(),
            description: "Create mobile-friendly navigation and layout components".to_string(),
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            assigned_to: Some("Mike Johnson".to_string()),
            due_date: Some(date(2024, 1, 25)),
        },
    ]
}
