//! In-memory task store.
//!
//! Tasks live only as long as the process. A restart resets the store to
//! whatever it was seeded with.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    models::{Task, TaskFields, TaskId, WeekId},
    ports::outbound::{LocatedTask, TaskRepository},
    TimesheetError,
};

type Weeks = BTreeMap<WeekId, Vec<Task>>;

/// Position of a task inside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskLocation {
    week_id: WeekId,
    index: usize,
}

/// Scan every week for the task id. O(total tasks).
fn locate(weeks: &Weeks, id: &TaskId) -> Option<TaskLocation> {
    weeks.iter().find_map(|(week_id, tasks)| {
        tasks
            .iter()
            .position(|task| &task.id == id)
            .map(|index| TaskLocation {
                week_id: week_id.clone(),
                index,
            })
    })
}

/// Task store keyed by week id, each week holding tasks in insertion order.
#[derive(Default)]
pub struct InMemoryTaskStore {
    weeks: RwLock<Weeks>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing week lists. Empty lists are kept as keys; a key
    /// only disappears when a removal empties it.
    pub fn with_tasks(self, tasks: impl IntoIterator<Item = (WeekId, Vec<Task>)>) -> Self {
        let weeks = tasks.into_iter().collect();
        Self {
            weeks: RwLock::new(weeks),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn find(&self, id: &TaskId) -> Result<Option<LocatedTask>, TimesheetError> {
        let weeks = self.weeks.read().await;

        Ok(locate(&weeks, id).and_then(|location| {
            weeks
                .get(&location.week_id)
                .and_then(|tasks| tasks.get(location.index))
                .map(|task| LocatedTask {
                    week_id: location.week_id.clone(),
                    task: task.clone(),
                })
        }))
    }

    async fn list(&self, week_id: &WeekId) -> Result<Vec<Task>, TimesheetError> {
        let weeks = self.weeks.read().await;
        Ok(weeks.get(week_id).cloned().unwrap_or_default())
    }

    async fn snapshot(&self) -> Result<BTreeMap<WeekId, Vec<Task>>, TimesheetError> {
        Ok(self.weeks.read().await.clone())
    }

    async fn insert(&self, week_id: &WeekId, task: Task) -> Result<Task, TimesheetError> {
        let mut weeks = self.weeks.write().await;

        if locate(&weeks, &task.id).is_some() {
            return Err(TimesheetError::DuplicateTask(task.id));
        }

        weeks.entry(week_id.clone()).or_default().push(task.clone());

        Ok(task)
    }

    async fn update(&self, id: &TaskId, fields: TaskFields) -> Result<Task, TimesheetError> {
        let mut weeks = self.weeks.write().await;

        let location =
            locate(&weeks, id).ok_or_else(|| TimesheetError::TaskNotFound(id.clone()))?;
        let task = weeks
            .get_mut(&location.week_id)
            .and_then(|tasks| tasks.get_mut(location.index))
            .ok_or_else(|| TimesheetError::TaskNotFound(id.clone()))?;

        task.apply(fields);

        Ok(task.clone())
    }

    async fn remove(&self, id: &TaskId) -> Result<Task, TimesheetError> {
        let mut weeks = self.weeks.write().await;

        let location =
            locate(&weeks, id).ok_or_else(|| TimesheetError::TaskNotFound(id.clone()))?;
        let tasks = weeks
            .get_mut(&location.week_id)
            .ok_or_else(|| TimesheetError::TaskNotFound(id.clone()))?;

        let removed = tasks.remove(location.index);
        if tasks.is_empty() {
            weeks.remove(&location.week_id);
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, date: &str) -> Task {
        Task::new(
            id,
            date,
            TaskFields {
                project: "Homepage Development".to_string(),
                task_type: "Feature".to_string(),
                description: "Created homepage layout".to_string(),
                hours: 8.0,
            },
        )
    }

    fn fields(project: &str, hours: f64) -> TaskFields {
        TaskFields {
            project: project.to_string(),
            task_type: "Bug Fix".to_string(),
            description: "Fixed it".to_string(),
            hours,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[tokio::test]
    async fn insert_then_find_returns_stored_task() {
        let store = InMemoryTaskStore::new();
        let week = WeekId::new("9");

        let stored = store.insert(&week, task("t1", "2024-02-01")).await.unwrap();
        let found = store.find(&TaskId::new("t1")).await.unwrap().unwrap();

        assert_eq!(found.week_id, week);
        assert_eq!(found.task, stored);
    }

    #[tokio::test]
    async fn find_missing_task_is_none() {
        let store = InMemoryTaskStore::new();
        assert!(store.find(&TaskId::new("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_id_is_rejected_in_any_week() {
        let store = InMemoryTaskStore::new();
        store
            .insert(&WeekId::new("1"), task("t1", "2024-01-01"))
            .await
            .unwrap();

        let same_week = store.insert(&WeekId::new("1"), task("t1", "2024-01-02")).await;
        let other_week = store.insert(&WeekId::new("2"), task("t1", "2024-01-08")).await;

        assert!(matches!(same_week, Err(TimesheetError::DuplicateTask(_))));
        assert!(matches!(other_week, Err(TimesheetError::DuplicateTask(_))));
        assert!(store.list(&WeekId::new("2")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn tasks_keep_insertion_order() {
        let store = InMemoryTaskStore::new();
        let week = WeekId::new("1");
        for id in ["c", "a", "b"] {
            store.insert(&week, task(id, "2024-01-01")).await.unwrap();
        }

        assert_eq!(ids(&store.list(&week).await.unwrap()), vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn list_of_unknown_week_is_empty() {
        let store = InMemoryTaskStore::new();
        assert!(store.list(&WeekId::new("42")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_fields_in_place() {
        let store = InMemoryTaskStore::new();
        let week = WeekId::new("1");
        store.insert(&week, task("a", "2024-01-01")).await.unwrap();
        store.insert(&week, task("b", "2024-01-02")).await.unwrap();

        let updated = store
            .update(&TaskId::new("a"), fields("API Development", 2.5))
            .await
            .unwrap();

        assert_eq!(updated.project, "API Development");
        assert_eq!(updated.hours, 2.5);
        assert_eq!(updated.date, "2024-01-01");

        let tasks = store.list(&week).await.unwrap();
        assert_eq!(ids(&tasks), vec!["a", "b"]);
        assert_eq!(tasks[0], updated);
    }

    #[tokio::test]
    async fn update_missing_task_fails() {
        let store = InMemoryTaskStore::new();
        let result = store.update(&TaskId::new("ghost"), fields("P", 1.0)).await;
        assert!(matches!(result, Err(TimesheetError::TaskNotFound(_))));
    }

    #[tokio::test]
    async fn removing_last_task_drops_week_key() {
        let store = InMemoryTaskStore::new();
        let week = WeekId::new("9");
        store.insert(&week, task("t1", "2024-02-01")).await.unwrap();

        let removed = store.remove(&TaskId::new("t1")).await.unwrap();

        assert_eq!(removed.id, TaskId::new("t1"));
        assert!(!store.snapshot().await.unwrap().contains_key(&week));
    }

    #[tokio::test]
    async fn removing_other_task_keeps_remaining_order() {
        let store = InMemoryTaskStore::new();
        let week = WeekId::new("1");
        for id in ["a", "b", "c"] {
            store.insert(&week, task(id, "2024-01-01")).await.unwrap();
        }

        store.remove(&TaskId::new("b")).await.unwrap();

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(ids(&snapshot[&week]), vec!["a", "c"]);
    }

    #[tokio::test]
    async fn remove_missing_task_fails() {
        let store = InMemoryTaskStore::new();
        let result = store.remove(&TaskId::new("ghost")).await;
        assert!(matches!(result, Err(TimesheetError::TaskNotFound(_))));
    }

    #[tokio::test]
    async fn seeding_keeps_empty_weeks() {
        let store = InMemoryTaskStore::new().with_tasks(vec![
            (WeekId::new("1"), vec![task("e1", "2024-01-01")]),
            (WeekId::new("5"), vec![]),
        ]);

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot[&WeekId::new("5")].is_empty());
    }
}
