//! Experience award on mission completion.
//!
//! Run [`award_completion`] in the same transaction as the
//! [`MissionQueue`](crate::queue::MissionQueue) completion so the slot and
//! the character's experience change together or not at all.

use questboard_core::error::CoreError;
use questboard_core::progression::apply_reward;
use serde::Serialize;
use sqlx::PgConnection;

use crate::models::character::Character;
use crate::models::character_mission::CharacterMission;
use crate::queue::QueueError;
use crate::repositories::{CharacterRepo, MissionRepo};

/// Result of completing a mission: the finished slot and the updated
/// character.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionOutcome {
    pub mission: CharacterMission,
    pub character: Character,
    pub xp_awarded: i32,
    pub leveled_up: bool,
}

/// Award the completed slot's mission reward to its character.
///
/// Adds `xp_reward` to experience, then raises the level by one if the
/// new total reaches `level * 100`.
pub async fn award_completion(
    conn: &mut PgConnection,
    slot: CharacterMission,
) -> Result<CompletionOutcome, QueueError> {
    let mission = MissionRepo::find_by_id(&mut *conn, slot.mission_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Mission",
            id: slot.mission_id,
        })?;

    let character = CharacterRepo::find_by_id_for_update(&mut *conn, slot.character_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Character",
            id: slot.character_id,
        })?;

    let progress = apply_reward(character.level, character.experience, mission.xp_reward);

    let character =
        CharacterRepo::set_progress(&mut *conn, character.id, progress.level, progress.experience)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Character",
                id: slot.character_id,
            })?;

    if progress.leveled_up {
        tracing::info!(
            character_id = character.id,
            level = character.level,
            experience = character.experience,
            "Character leveled up",
        );
    }

    Ok(CompletionOutcome {
        mission: slot,
        character,
        xp_awarded: mission.xp_reward,
        leveled_up: progress.leveled_up,
    })
}
