//! Character entity model and DTOs.

use questboard_core::progression::STARTING_LEVEL;
use questboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub level: i32,
    pub experience: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCharacter {
    #[validate(length(min = 1, max = 100, message = "must be between 1 and 100 characters"))]
    pub name: String,
    /// Defaults to 1 if omitted.
    #[serde(default = "default_level")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub level: i32,
    /// Defaults to 0 if omitted.
    #[serde(default)]
    #[validate(range(min = 0, message = "must not be negative"))]
    pub experience: i32,
}

fn default_level() -> i32 {
    STARTING_LEVEL
}

/// Character detail with queue counters, for `GET /characters/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    /// Total slots ever created for the character, any status.
    pub mission_count: i64,
    /// Active (pending or in-progress) slots.
    pub pending_missions: i64,
}
