//! Queue slot model: one row of a character's mission queue.

use questboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::status::{serialize_status_name, StatusId};

/// A row from the `character_missions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterMission {
    pub id: DbId,
    pub character_id: DbId,
    pub mission_id: DbId,
    pub queue_position: i32,
    #[serde(rename = "status", serialize_with = "serialize_status_name")]
    pub status_id: StatusId,
    pub accepted_at: Timestamp,
    /// Set if and only if the slot is completed.
    pub completed_at: Option<Timestamp>,
}

/// A queue slot joined with its mission catalog entry, for
/// `GET /characters/{id}/missions`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QueueEntry {
    pub id: DbId,
    pub character_id: DbId,
    pub character_name: String,
    pub mission_id: DbId,
    pub title: String,
    pub description: String,
    pub xp_reward: i32,
    pub difficulty: i16,
    pub queue_position: i32,
    #[serde(rename = "status", serialize_with = "serialize_status_name")]
    pub status_id: StatusId,
    pub accepted_at: Timestamp,
    pub completed_at: Option<Timestamp>,
}
