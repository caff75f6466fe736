use thiserror::Error;

use super::models::{TaskId, WeekId};

/// Errors that can occur during timesheet operations.
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// One message per violated field.
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error("Task not found")]
    TaskNotFound(TaskId),
    #[error("Task with this ID already exists")]
    DuplicateTask(TaskId),
    #[error("Week not found: {0}")]
    WeekNotFound(WeekId),
}
