use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{GetTasksResponse, TaskDeletedResponse, TaskMutationResponse},
    app_state::AppState,
    domain::models::{TaskDraft, TaskId, WeekId},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_tasks)
            .post(create_task)
            .put(update_task)
            .delete(delete_task),
    )
}

// ============================================================================
// Payloads
// ============================================================================

/// Task fields as sent by the client.
///
/// Kept as raw JSON values so that a field of the wrong type is reported as a
/// validation error next to the others instead of failing the whole body.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    id: Option<Value>,
    project: Option<Value>,
    #[serde(rename = "type")]
    task_type: Option<Value>,
    description: Option<Value>,
    hours: Option<Value>,
}

impl From<TaskPayload> for TaskDraft {
    fn from(payload: TaskPayload) -> Self {
        Self {
            id: text(payload.id),
            project: text(payload.project),
            task_type: text(payload.task_type),
            description: text(payload.description),
            hours: payload.hours.as_ref().and_then(Value::as_f64),
        }
    }
}

fn text(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Get Tasks
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksQuery {
    id: Option<String>,
    week_id: Option<String>,
}

/// Looks up a single task by `id`, else lists a week by `weekId`, else returns
/// the whole store.
#[instrument(name = "get_tasks", skip(app_state))]
pub async fn get_tasks(
    State(app_state): State<AppState>,
    query: Result<Query<TasksQuery>, QueryRejection>,
) -> Result<Json<GetTasksResponse>, ApiError> {
    let Query(query) = query?;
    let service = &app_state.timesheet_service;

    if let Some(id) = non_empty(query.id) {
        let task = service.find_task(&TaskId::new(id)).await?;
        return Ok(Json(GetTasksResponse::single(task)));
    }

    if let Some(week_id) = non_empty(query.week_id) {
        let tasks = service.list_tasks(&WeekId::new(week_id)).await?;
        return Ok(Json(GetTasksResponse::week(tasks)));
    }

    let store = service.all_tasks().await?;
    Ok(Json(GetTasksResponse::all(store)))
}

// ============================================================================
// Create Task
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    #[serde(flatten)]
    task: TaskPayload,
    date: Option<Value>,
    week_id: Option<Value>,
}

#[instrument(name = "create_task", skip(app_state, payload))]
pub async fn create_task(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskMutationResponse>), ApiError> {
    let Json(payload) = payload?;

    let week_id = non_empty(text(payload.week_id))
        .ok_or_else(|| ApiError::malformed("Missing or invalid weekId"))?;
    let date = non_empty(text(payload.date))
        .ok_or_else(|| ApiError::malformed("Missing or invalid date"))?;

    let task = app_state
        .timesheet_service
        .add_task(&WeekId::new(week_id), &date, payload.task.into())
        .await?;

    Ok((StatusCode::CREATED, Json(TaskMutationResponse::added(task))))
}

// ============================================================================
// Update Task
// ============================================================================

#[instrument(name = "update_task", skip(app_state, payload))]
pub async fn update_task(
    State(app_state): State<AppState>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskMutationResponse>, ApiError> {
    let Json(payload) = payload?;

    let task = app_state
        .timesheet_service
        .update_task(payload.into())
        .await?;

    Ok(Json(TaskMutationResponse::updated(task)))
}

// ============================================================================
// Delete Task
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DeleteTaskQuery {
    id: Option<String>,
}

#[instrument(name = "delete_task", skip(app_state))]
pub async fn delete_task(
    State(app_state): State<AppState>,
    query: Result<Query<DeleteTaskQuery>, QueryRejection>,
) -> Result<Json<TaskDeletedResponse>, ApiError> {
    let Query(query) = query?;
    let id = query
        .id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::malformed("Valid task ID required"))?;

    let task = app_state
        .timesheet_service
        .remove_task(&TaskId::new(id))
        .await?;

    Ok(Json(task.into()))
}
