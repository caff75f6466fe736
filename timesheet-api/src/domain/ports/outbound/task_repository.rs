use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    models::{Task, TaskFields, TaskId, WeekId},
    TimesheetError,
};

/// A task together with the week that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedTask {
    pub week_id: WeekId,
    pub task: Task,
}

/// Outbound port for task storage.
///
/// Implementations keep tasks grouped by week in insertion order and enforce
/// that a task id is unique across all weeks.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Find a task by id in any week.
    async fn find(&self, id: &TaskId) -> Result<Option<LocatedTask>, TimesheetError>;

    /// Tasks of one week, empty if the week has none.
    async fn list(&self, week_id: &WeekId) -> Result<Vec<Task>, TimesheetError>;

    /// Every week key with its tasks.
    async fn snapshot(&self) -> Result<BTreeMap<WeekId, Vec<Task>>, TimesheetError>;

    /// Append a task to a week.
    ///
    /// Fails with [`TimesheetError::DuplicateTask`] if the id exists in any week.
    async fn insert(&self, week_id: &WeekId, task: Task) -> Result<Task, TimesheetError>;

    /// Replace the editable fields of a task in place.
    async fn update(&self, id: &TaskId, fields: TaskFields) -> Result<Task, TimesheetError>;

    /// Remove a task and return it. A week left without tasks loses its key.
    async fn remove(&self, id: &TaskId) -> Result<Task, TimesheetError>;
}
