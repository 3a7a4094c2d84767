//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use questboard_core::error::CoreError;
use questboard_core::types::DbId;
use questboard_core::validation::validate_input;
use questboard_db::models::character::{Character, CharacterDetail, CreateCharacter};
use questboard_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/characters
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<(StatusCode, Json<Character>)> {
    validate_input(&input)?;
    let character = CharacterRepo::create(&state.pool, &input).await?;
    tracing::info!(character_id = character.id, name = %character.name, "Character created");
    Ok((StatusCode::CREATED, Json(character)))
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Character>>> {
    let (limit, offset) = params.resolve();
    let characters = CharacterRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(characters))
}

/// GET /api/v1/characters/{id}
///
/// Includes `mission_count` (every slot ever created) and
/// `pending_missions` (active slots).
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = find_character(&state, id).await?;
    let (mission_count, pending_missions) = CharacterRepo::slot_counts(&state.pool, id).await?;
    Ok(Json(CharacterDetail {
        character,
        mission_count,
        pending_missions,
    }))
}

/// Load a character or fail with `NotFound`.
pub(crate) async fn find_character(state: &AppState, id: DbId) -> AppResult<Character> {
    CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
}
