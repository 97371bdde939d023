//! Built-in board contents.
//!
//! `columns()` is the fixed column set every board uses. `demo_tasks()` is the
//! sample board the dashboard shows before a real data source is wired in.

use chrono::NaiveDate;

use crate::types::{Assignee, Column, Priority, Status, Task};

/// The four board columns in display order
pub fn columns() -> Vec<Column> {
    vec![
        Column::new(Status::Todo, "To Do", "gray"),
        Column::new(Status::InProgress, "In Progress", "blue"),
        Column::new(Status::Review, "Review", "yellow"),
        Column::new(Status::Done, "Done", "green"),
    ]
}

/// Calendar date for built-in data. Only called with literal, valid dates.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    title: &str,
    description: &str,
    status: Status,
    priority: Priority,
    assignee: &str,
    due: NaiveDate,
    tags: &[&str],
    project: &str,
) -> Task {
    tags.iter().fold(
        Task::new(title, status)
            .with_id(id)
            .with_description(description)
            .with_priority(priority)
            .with_assignee(Assignee::new(assignee))
            .with_due_date(due)
            .with_project(project),
        |task, tag| task.with_tag(*tag),
    )
}

/// Six sample tasks spread across all four columns
pub fn demo_tasks() -> Vec<Task> {
    vec![
        demo(
            "1",
            "Design Homepage Layout",
            "Create wireframes and mockups for the new homepage design",
            Status::Todo,
            Priority::High,
            "Sarah Johnson",
            date(2024, 2, 10),
            &["design", "frontend"],
            "Website Redesign",
        ),
        demo(
            "2",
            "API Integration",
            "Integrate user authentication API with frontend",
            Status::InProgress,
            Priority::High,
            "Mike Chen",
            date(2024, 2, 12),
            &["backend", "api"],
            "Website Redesign",
        ),
        demo(
            "3",
            "Database Schema Update",
            "Update user table schema to support new fields",
            Status::Review,
            Priority::Medium,
            "Emily Davis",
            date(2024, 2, 8),
            &["database", "backend"],
            "Database Migration",
        ),
        demo(
            "4",
            "User Testing Session",
            "Conduct usability testing with 5 target users",
            Status::Done,
            Priority::Low,
            "David Wilson",
            date(2024, 2, 5),
            &["testing", "ux"],
            "Mobile App",
        ),
        demo(
            "5",
            "Mobile Responsiveness",
            "Ensure all pages are responsive on mobile devices",
            Status::Todo,
            Priority::Medium,
            "Sarah Johnson",
            date(2024, 2, 15),
            &["frontend", "mobile"],
            "Website Redesign",
        ),
        demo(
            "6",
            "Performance Optimization",
            "Optimize page load times and reduce bundle size",
            Status::InProgress,
            Priority::Medium,
            "Mike Chen",
            date(2024, 2, 20),
            &["performance", "frontend"],
            "Website Redesign",
        ),
    ]
}
