//! Mission catalog model and DTOs.
//!
//! Missions are immutable once created; there is no update DTO.

use questboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A mission row from the `missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Mission {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub xp_reward: i32,
    /// Ordinal 1 (trivial) to 5 (deadly).
    pub difficulty: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new mission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMission {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub xp_reward: i32,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub difficulty: i16,
}
