//! Demo weeks and entries loaded at startup.

use crate::domain::models::{Task, TaskFields, TimesheetWeek, WeekId, WeekStatus};

pub fn demo_weeks() -> Vec<TimesheetWeek> {
    vec![
        TimesheetWeek::new("1", 1, "1 - 5 January, 2024", WeekStatus::Completed),
        TimesheetWeek::new("2", 2, "8 - 12 January, 2024", WeekStatus::Completed),
        TimesheetWeek::new("3", 3, "15 - 19 January, 2024", WeekStatus::Incomplete),
        TimesheetWeek::new("4", 4, "22 - 26 January, 2024", WeekStatus::Completed),
        TimesheetWeek::new("5", 5, "28 January - 1 February, 2024", WeekStatus::Missing),
    ]
}

/// Demo entries per week. Week 5 is listed with no entries.
pub fn demo_tasks() -> Vec<(WeekId, Vec<Task>)> {
    vec![
        (
            WeekId::new("1"),
            vec![
                task("e1", "2024-01-01", "Homepage Development", "Feature", "Created homepage layout", 8.0),
                task("e2", "2024-01-02", "Homepage Development", "Bug Fix", "Fixed responsive design issues", 6.0),
                task("e3", "2024-01-03", "User Authentication", "Feature", "Implemented login system", 8.0),
            ],
        ),
        (
            WeekId::new("2"),
            vec![
                task("e4", "2024-01-08", "API Development", "Feature", "Created REST endpoints", 7.0),
                task("e5", "2024-01-09", "API Development", "Testing", "Unit tests for API endpoints", 6.0),
                task("temp-edit-id", "2024-01-10", "UI Enhancement", "Bug Fix", "Fix alignment in header component", 5.0),
            ],
        ),
        (
            WeekId::new("3"),
            vec![task("e6", "2024-01-15", "Database Design", "Feature", "Created user tables", 4.0)],
        ),
        (
            WeekId::new("4"),
            vec![
                task("e7", "2024-01-22", "Frontend Components", "Feature", "Built reusable UI components", 8.0),
                task("e8", "2024-01-23", "Frontend Components", "Styling", "Applied design system", 6.0),
            ],
        ),
        (WeekId::new("5"), vec![]),
    ]
}

fn task(id: &str, date: &str, project: &str, task_type: &str, description: &str, hours: f64) -> Task {
    Task::new(
        id,
        date,
        TaskFields {
            project: project.to_string(),
            task_type: task_type.to_string(),
            description: description.to_string(),
            hours,
        },
    )
}
