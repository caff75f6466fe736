//! HTTP response types for timesheet endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{
    models::{DayEntries, Task, TimesheetWeek, WeekAction, WeekId, WeekOverview, WeekStatus},
    User,
};

/// A stored task entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: String,
    /// Date in YYYY-MM-DD format.
    pub date: String,
    pub project: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub description: String,
    pub hours: f64,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id.to_string(),
            date: task.date,
            project: task.project,
            task_type: task.task_type,
            description: task.description,
            hours: task.hours,
        }
    }
}

fn task_responses(tasks: Vec<Task>) -> Vec<TaskResponse> {
    tasks.into_iter().map(Into::into).collect()
}

/// Body of `GET /tasks`, shaped by which query parameter was given.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GetTasksResponse {
    Single {
        task: TaskResponse,
    },
    Week {
        tasks: Vec<TaskResponse>,
    },
    #[serde(rename_all = "camelCase")]
    All {
        timesheet_entries: BTreeMap<String, Vec<TaskResponse>>,
    },
}

impl GetTasksResponse {
    pub fn single(task: Task) -> Self {
        Self::Single { task: task.into() }
    }

    pub fn week(tasks: Vec<Task>) -> Self {
        Self::Week {
            tasks: task_responses(tasks),
        }
    }

    pub fn all(store: BTreeMap<WeekId, Vec<Task>>) -> Self {
        Self::All {
            timesheet_entries: store
                .into_iter()
                .map(|(week_id, tasks)| (week_id.to_string(), task_responses(tasks)))
                .collect(),
        }
    }
}

/// Body of a successful create or update.
#[derive(Debug, Serialize)]
pub struct TaskMutationResponse {
    pub message: String,
    pub task: TaskResponse,
}

impl TaskMutationResponse {
    pub fn added(task: Task) -> Self {
        Self {
            message: "Task added successfully".to_string(),
            task: task.into(),
        }
    }

    pub fn updated(task: Task) -> Self {
        Self {
            message: "Task updated successfully".to_string(),
            task: task.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDeletedResponse {
    pub message: String,
    pub deleted_task: TaskResponse,
}

impl From<Task> for TaskDeletedResponse {
    fn from(task: Task) -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
            deleted_task: task.into(),
        }
    }
}

/// A row of the weekly timesheet list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub id: String,
    pub week: u32,
    pub date_range: String,
    pub status: WeekStatus,
    pub action: WeekAction,
    pub action_path: String,
}

impl From<TimesheetWeek> for WeekResponse {
    fn from(week: TimesheetWeek) -> Self {
        Self {
            action: week.action(),
            action_path: week.action_path(),
            id: week.id.to_string(),
            week: week.week,
            date_range: week.date_range,
            status: week.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: Vec<TaskResponse>,
}

impl From<DayEntries> for DayResponse {
    fn from(day: DayEntries) -> Self {
        Self {
            date: day.date,
            tasks: task_responses(day.tasks),
        }
    }
}

/// A week's detail page: tasks grouped by day plus progress towards the target.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekOverviewResponse {
    pub week: WeekResponse,
    pub days: Vec<DayResponse>,
    pub total_hours: f64,
    pub target_hours: f64,
    pub progress_percent: f64,
}

impl From<WeekOverview> for WeekOverviewResponse {
    fn from(overview: WeekOverview) -> Self {
        Self {
            progress_percent: overview.progress_percent(),
            total_hours: overview.total_hours,
            target_hours: overview.target_hours,
            week: overview.week.into(),
            days: overview.days.into_iter().map(Into::into).collect(),
        }
    }
}

/// A user as exposed to clients. Carries no credential.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}
