use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;

use crate::domain::{
    models::{Task, TaskDraft, TaskId, TimesheetWeek, WeekId, WeekOverview},
    ports::{inbound::TimesheetService, outbound::TaskRepository},
    TimesheetError,
};

/// Implementation of the TimesheetService inbound port.
///
/// Validates caller input and delegates storage to a [`TaskRepository`].
/// Week metadata is a fixed catalog; its status is not recomputed when tasks
/// are added or removed.
pub struct TimesheetServiceImpl<R> {
    repo: Arc<R>,
    weeks: Vec<TimesheetWeek>,
    weekly_target_hours: f64,
}

impl<R> TimesheetServiceImpl<R> {
    pub fn new(repo: Arc<R>, weeks: Vec<TimesheetWeek>, weekly_target_hours: f64) -> Self {
        Self {
            repo,
            weeks,
            weekly_target_hours,
        }
    }

    fn catalog_week(&self, week_id: &WeekId) -> Result<TimesheetWeek, TimesheetError> {
        self.weeks
            .iter()
            .find(|week| &week.id == week_id)
            .cloned()
            .ok_or_else(|| TimesheetError::WeekNotFound(week_id.clone()))
    }
}

#[async_trait]
impl<R: TaskRepository> TimesheetService for TimesheetServiceImpl<R> {
    async fn list_weeks(&self) -> Result<Vec<TimesheetWeek>, TimesheetError> {
        Ok(self.weeks.clone())
    }

    async fn get_week(&self, week_id: &WeekId) -> Result<TimesheetWeek, TimesheetError> {
        self.catalog_week(week_id)
    }

    async fn week_overview(&self, week_id: &WeekId) -> Result<WeekOverview, TimesheetError> {
        let week = self.catalog_week(week_id)?;
        let tasks = self.repo.list(week_id).await?;

        Ok(WeekOverview::new(week, &tasks, self.weekly_target_hours))
    }

    async fn find_task(&self, id: &TaskId) -> Result<Task, TimesheetError> {
        self.repo
            .find(id)
            .await?
            .map(|located| located.task)
            .ok_or_else(|| TimesheetError::TaskNotFound(id.clone()))
    }

    async fn list_tasks(&self, week_id: &WeekId) -> Result<Vec<Task>, TimesheetError> {
        self.repo.list(week_id).await
    }

    async fn all_tasks(&self) -> Result<BTreeMap<WeekId, Vec<Task>>, TimesheetError> {
        self.repo.snapshot().await
    }

    async fn add_task(
        &self,
        week_id: &WeekId,
        date: &str,
        draft: TaskDraft,
    ) -> Result<Task, TimesheetError> {
        let valid = draft.validate()?;
        let task = Task::new(valid.id, date, valid.fields);

        let task = self.repo.insert(week_id, task).await?;
        tracing::info!(task_id = %task.id, week_id = %week_id, "task added");

        Ok(task)
    }

    async fn update_task(&self, draft: TaskDraft) -> Result<Task, TimesheetError> {
        let valid = draft.validate()?;

        let task = self.repo.update(&valid.id, valid.fields).await?;
        tracing::info!(task_id = %task.id, "task updated");

        Ok(task)
    }

    async fn remove_task(&self, id: &TaskId) -> Result<Task, TimesheetError> {
        let task = self.repo.remove(id).await?;
        tracing::info!(task_id = %task.id, "task removed");

        Ok(task)
    }
}
