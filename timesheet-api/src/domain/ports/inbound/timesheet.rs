use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    models::{Task, TaskDraft, TaskId, TimesheetWeek, WeekId, WeekOverview},
    TimesheetError,
};

/// Inbound port for timesheet operations.
///
/// This trait defines the use cases that HTTP handlers can invoke.
#[async_trait]
pub trait TimesheetService: Send + Sync + 'static {
    // ========================================================================
    // Week Metadata
    // ========================================================================

    /// All weeks of the timesheet list, in catalog order.
    async fn list_weeks(&self) -> Result<Vec<TimesheetWeek>, TimesheetError>;

    async fn get_week(&self, week_id: &WeekId) -> Result<TimesheetWeek, TimesheetError>;

    /// Tasks of a catalogued week grouped by day, with hour totals.
    async fn week_overview(&self, week_id: &WeekId) -> Result<WeekOverview, TimesheetError>;

    // ========================================================================
    // Task Operations
    // ========================================================================

    async fn find_task(&self, id: &TaskId) -> Result<Task, TimesheetError>;

    async fn list_tasks(&self, week_id: &WeekId) -> Result<Vec<Task>, TimesheetError>;

    /// The whole store, keyed by week id.
    async fn all_tasks(&self) -> Result<BTreeMap<WeekId, Vec<Task>>, TimesheetError>;

    /// Validate and append a new task to a week.
    async fn add_task(
        &self,
        week_id: &WeekId,
        date: &str,
        draft: TaskDraft,
    ) -> Result<Task, TimesheetError>;

    /// Validate and replace the editable fields of the task named by `draft.id`.
    async fn update_task(&self, draft: TaskDraft) -> Result<Task, TimesheetError>;

    async fn remove_task(&self, id: &TaskId) -> Result<Task, TimesheetError>;
}
