use crate::domain::TimesheetError;

use super::TaskId;

/// A single logged unit of work inside a week.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    /// ISO date (YYYY-MM-DD) as supplied by the caller.
    pub date: String,
    pub project: String,
    pub task_type: String,
    pub description: String,
    pub hours: f64,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, date: impl Into<String>, fields: TaskFields) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            project: fields.project,
            task_type: fields.task_type,
            description: fields.description,
            hours: fields.hours,
        }
    }

    /// Replace the editable fields. Id and date are left untouched.
    pub fn apply(&mut self, fields: TaskFields) {
        self.project = fields.project;
        self.task_type = fields.task_type;
        self.description = fields.description;
        self.hours = fields.hours;
    }
}

/// The editable part of a task, already trimmed and validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    pub project: String,
    pub task_type: String,
    pub description: String,
    pub hours: f64,
}

/// A validated create/update request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTask {
    pub id: TaskId,
    pub fields: TaskFields,
}

/// Unvalidated task input as received from a caller.
///
/// Fields that were absent or of the wrong type are `None`.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub id: Option<String>,
    pub project: Option<String>,
    pub task_type: Option<String>,
    pub description: Option<String>,
    pub hours: Option<f64>,
}

impl TaskDraft {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = Some(task_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Check every field and collect one message per violation.
    ///
    /// Hours must be strictly positive, so `0` is rejected the same way a
    /// missing value is.
    pub fn validate(self) -> Result<ValidTask, TimesheetError> {
        let mut errors = Vec::new();

        let id = required(self.id, "id", &mut errors);
        let project = required(self.project, "project", &mut errors);
        let task_type = required(self.task_type, "type", &mut errors);
        let description = required(self.description, "description", &mut errors);
        let hours = match self.hours {
            Some(hours) if hours.is_finite() && hours > 0.0 => Some(hours),
            _ => {
                errors.push("Invalid or missing hours (must be a positive number)".to_string());
                None
            }
        };

        match (id, project, task_type, description, hours) {
            (Some(id), Some(project), Some(task_type), Some(description), Some(hours)) => {
                Ok(ValidTask {
                    id: TaskId::new(id),
                    fields: TaskFields {
                        project: project.trim().to_string(),
                        task_type: task_type.trim().to_string(),
                        description: description.trim().to_string(),
                        hours,
                    },
                })
            }
            _ => Err(TimesheetError::Validation(errors)),
        }
    }
}

fn required(value: Option<String>, field: &str, errors: &mut Vec<String>) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            errors.push(format!("Invalid or missing {field}"));
            None
        }
    }
}
