//! Handlers for the `/missions` catalog.
//!
//! Missions are created by administrators and never modified afterwards.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_core::validation::validate_input;
use questboard_db::models::mission::{CreateMission, Mission};
use questboard_db::repositories::MissionRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/missions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMission>,
) -> AppResult<(StatusCode, Json<Mission>)> {
    validate_input(&input)?;
    let mission = MissionRepo::create(&state.pool, &input).await?;
    tracing::info!(mission_id = mission.id, title = %mission.title, "Mission created");
    Ok((StatusCode::CREATED, Json(mission)))
}

/// GET /api/v1/missions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Mission>>> {
    let (limit, offset) = params.resolve();
    let missions = MissionRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(missions))
}

/// GET /api/v1/missions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Mission>> {
    let mission = MissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mission",
            id,
        }))?;
    Ok(Json(mission))
}
