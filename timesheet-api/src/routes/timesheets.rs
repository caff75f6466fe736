use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    adapters::inbound::http::{WeekOverviewResponse, WeekResponse},
    app_state::AppState,
    domain::models::WeekId,
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_weeks))
        .route("/:week_id", get(get_week))
        .route("/:week_id/days", get(get_week_days))
}

#[instrument(name = "list_weeks", skip(app_state))]
pub async fn list_weeks(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<WeekResponse>>, ApiError> {
    let weeks = app_state.timesheet_service.list_weeks().await?;
    Ok(Json(weeks.into_iter().map(Into::into).collect()))
}

#[instrument(name = "get_week", skip(app_state))]
pub async fn get_week(
    State(app_state): State<AppState>,
    Path(week_id): Path<String>,
) -> Result<Json<WeekResponse>, ApiError> {
    let week = app_state
        .timesheet_service
        .get_week(&WeekId::new(week_id))
        .await?;
    Ok(Json(week.into()))
}

#[instrument(name = "get_week_days", skip(app_state))]
pub async fn get_week_days(
    State(app_state): State<AppState>,
    Path(week_id): Path<String>,
) -> Result<Json<WeekOverviewResponse>, ApiError> {
    let overview = app_state
        .timesheet_service
        .week_overview(&WeekId::new(week_id))
        .await?;
    Ok(Json(overview.into()))
}
