//! Handlers for per-character mission queues.
//!
//! Two route families reach the same queue:
//! - character-scoped: `/characters/{character_id}/missions[...]`,
//!   `/characters/{character_id}/start`, `/characters/{character_id}/complete`
//! - mission-scoped: `/missions/{mission_id}/{accept,start,complete}?character_id=`
//!
//! Every mutation runs in its own transaction; completion and the XP award
//! commit together.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_db::models::character_mission::{CharacterMission, QueueEntry};
use questboard_db::progression::{award_completion, CompletionOutcome};
use questboard_db::queue::MissionQueue;
use questboard_db::repositories::CharacterMissionRepo;

use super::character::find_character;
use crate::error::{AppError, AppResult};
use crate::query::CharacterIdParam;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Character-scoped
// ---------------------------------------------------------------------------

/// GET /api/v1/characters/{character_id}/missions
///
/// Every slot, any status, in queue order, joined with mission details.
pub async fn list_for_character(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<Vec<QueueEntry>>> {
    find_character(&state, character_id).await?;
    let entries = CharacterMissionRepo::list_queue_view(&state.pool, character_id).await?;
    Ok(Json(entries))
}

/// GET /api/v1/characters/{character_id}/missions/next
///
/// The head of the queue, without changing it.
pub async fn next_for_character(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<CharacterMission>> {
    find_character(&state, character_id).await?;
    let mut conn = state.pool.acquire().await?;
    let head = MissionQueue::new(character_id)
        .first(&mut conn)
        .await?
        .ok_or_else(|| empty_queue(character_id))?;
    Ok(Json(head))
}

/// POST /api/v1/characters/{character_id}/missions/{mission_id}
pub async fn accept_for_character(
    State(state): State<AppState>,
    Path((character_id, mission_id)): Path<(DbId, DbId)>,
) -> AppResult<(StatusCode, Json<CharacterMission>)> {
    let slot = accept(&state, character_id, mission_id).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// POST /api/v1/characters/{character_id}/start
///
/// Start the earliest pending slot. In-progress slots are skipped.
pub async fn start_next_for_character(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<CharacterMission>> {
    let mut tx = state.pool.begin().await?;
    let started = MissionQueue::new(character_id)
        .start_next_mission(&mut tx)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Pending mission for character",
                id: character_id,
            })
        })?;
    tx.commit().await?;
    Ok(Json(started))
}

/// POST /api/v1/characters/{character_id}/complete
///
/// Complete the head, whether or not it was started, and award its XP.
pub async fn complete_current_for_character(
    State(state): State<AppState>,
    Path(character_id): Path<DbId>,
) -> AppResult<Json<CompletionOutcome>> {
    let mut tx = state.pool.begin().await?;
    let slot = MissionQueue::new(character_id).complete_head(&mut tx).await?;
    let outcome = award_completion(&mut tx, slot).await?;
    tx.commit().await?;
    Ok(Json(outcome))
}

// ---------------------------------------------------------------------------
// Mission-scoped
// ---------------------------------------------------------------------------

/// POST /api/v1/missions/{mission_id}/accept?character_id=
pub async fn accept_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    Query(params): Query<CharacterIdParam>,
) -> AppResult<(StatusCode, Json<CharacterMission>)> {
    let slot = accept(&state, params.require()?, mission_id).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

/// POST /api/v1/missions/{mission_id}/start?character_id=
///
/// The named mission must be the head of the character's queue.
pub async fn start_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    Query(params): Query<CharacterIdParam>,
) -> AppResult<Json<CharacterMission>> {
    let character_id = params.require()?;
    let mut tx = state.pool.begin().await?;
    let started = MissionQueue::new(character_id)
        .start_head(&mut tx, mission_id)
        .await?;
    tx.commit().await?;
    Ok(Json(started))
}

/// POST /api/v1/missions/{mission_id}/complete?character_id=
///
/// The named mission must be in progress at the head of the queue.
pub async fn complete_mission(
    State(state): State<AppState>,
    Path(mission_id): Path<DbId>,
    Query(params): Query<CharacterIdParam>,
) -> AppResult<Json<CompletionOutcome>> {
    let character_id = params.require()?;
    let mut tx = state.pool.begin().await?;
    let slot = MissionQueue::new(character_id)
        .complete_in_progress(&mut tx, mission_id)
        .await?;
    let outcome = award_completion(&mut tx, slot).await?;
    tx.commit().await?;
    Ok(Json(outcome))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn accept(state: &AppState, character_id: DbId, mission_id: DbId) -> AppResult<CharacterMission> {
    let mut tx = state.pool.begin().await?;
    let slot = MissionQueue::new(character_id)
        .enqueue(&mut tx, mission_id)
        .await?;
    tx.commit().await?;
    Ok(slot)
}

fn empty_queue(character_id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Queued mission for character",
        id: character_id,
    })
}
