use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    adapters::inbound::http::TaskResponse, app_state::AppState, domain::models::WeekId,
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_entries))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntriesQuery {
    week_id: Option<String>,
}

/// Bare task list of one week, as the week detail page consumes it.
#[instrument(name = "list_entries", skip(app_state))]
pub async fn list_entries(
    State(app_state): State<AppState>,
    query: Result<Query<EntriesQuery>, QueryRejection>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let Query(query) = query?;
    let week_id = query
        .week_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::malformed("weekId is required"))?;

    let tasks = app_state
        .timesheet_service
        .list_tasks(&WeekId::new(week_id))
        .await?;

    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::routes::test_support::{get, seeded_state, send};

    fn app() -> Router {
        Router::new()
            .nest("/entries", router())
            .with_state(seeded_state())
    }

    #[tokio::test]
    async fn returns_bare_task_list() {
        let (status, body) = send(&app(), get("/entries?weekId=3")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": "e6",
                "date": "2024-01-15",
                "project": "Database Design",
                "type": "Feature",
                "description": "Created user tables",
                "hours": 4.0,
            }])
        );
    }

    #[tokio::test]
    async fn unknown_week_is_empty() {
        let (status, body) = send(&app(), get("/entries?weekId=42")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn week_id_is_required() {
        let (status, body) = send(&app(), get("/entries")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn repeated_week_id_gets_a_json_error() {
        let (status, body) = send(&app(), get("/entries?weekId=1&weekId=2")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "MALFORMED_REQUEST");
    }
}
