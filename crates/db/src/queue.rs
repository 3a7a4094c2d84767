//! Per-character FIFO mission queue.
//!
//! The queue is not an in-memory structure: it is reconstructed on every
//! call from `character_missions` rows. Each slot receives a queue position
//! strictly greater than every position previously assigned to the same
//! character, and the head is the active slot with the lowest position.
//! Completed slots stay in the table as history and never rejoin the queue.
//!
//! Every operation takes an explicit `&mut PgConnection`. Pass an open
//! transaction (`&mut *tx`) to make an operation, or a sequence of them,
//! atomic. Mutating operations lock the character row first, so concurrent
//! writers for the same character are serialised inside transactions while
//! other characters proceed independently.

use questboard_core::error::CoreError;
use questboard_core::mission_queue::next_queue_position;
use questboard_core::mission_queue::state_machine::validate_transition;
use questboard_core::types::DbId;
use sqlx::PgConnection;

use crate::models::character::Character;
use crate::models::character_mission::CharacterMission;
use crate::models::status::MissionStatus;
use crate::repositories::{CharacterMissionRepo, CharacterRepo, MissionRepo};

/// Unique index guarding against two active slots for the same mission.
const ACTIVE_MISSION_CONSTRAINT: &str = "uq_character_missions_active_mission";

/// Unique constraint on `(character_id, queue_position)`.
const POSITION_CONSTRAINT: &str = "uq_character_missions_position";

/// Errors produced by queue operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// A domain-level error (not found, conflict, validation).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The mission queue of a single character.
#[derive(Debug, Clone, Copy)]
pub struct MissionQueue {
    character_id: DbId,
}

impl MissionQueue {
    pub fn new(character_id: DbId) -> Self {
        Self { character_id }
    }

    /// `true` when the character has no pending or in-progress slots.
    pub async fn is_empty(&self, conn: &mut PgConnection) -> Result<bool, QueueError> {
        Ok(self.size(conn).await? == 0)
    }

    /// Number of pending and in-progress slots.
    pub async fn size(&self, conn: &mut PgConnection) -> Result<i64, QueueError> {
        Ok(CharacterMissionRepo::count_active(conn, self.character_id).await?)
    }

    /// Append a mission to the back of the queue.
    ///
    /// Fails with `NotFound` for an unknown character or mission and with
    /// `Conflict` when the mission is already active in this queue. The new
    /// slot is pending, positioned one past the highest position ever
    /// assigned to the character.
    pub async fn enqueue(
        &self,
        conn: &mut PgConnection,
        mission_id: DbId,
    ) -> Result<CharacterMission, QueueError> {
        self.lock_character(conn).await?;

        MissionRepo::find_by_id(&mut *conn, mission_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Mission",
                id: mission_id,
            })?;

        if CharacterMissionRepo::find_active_by_mission(&mut *conn, self.character_id, mission_id)
            .await?
            .is_some()
        {
            return Err(already_accepted(mission_id).into());
        }

        let max_position = CharacterMissionRepo::max_position(&mut *conn, self.character_id).await?;
        let queue_position = next_queue_position(max_position);

        let slot =
            CharacterMissionRepo::insert(&mut *conn, self.character_id, mission_id, queue_position)
                .await
                .map_err(|e| classify_insert_error(e, mission_id))?;

        tracing::info!(
            character_id = self.character_id,
            mission_id,
            queue_position,
            slot_id = slot.id,
            "Mission enqueued",
        );
        Ok(slot)
    }

    /// The head of the queue: the active slot with the lowest position.
    pub async fn first(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Option<CharacterMission>, QueueError> {
        Ok(CharacterMissionRepo::find_head(conn, self.character_id).await?)
    }

    /// Start the lowest-positioned pending slot.
    ///
    /// Already in-progress slots are skipped. Returns `None` when nothing
    /// is pending.
    pub async fn start_next_mission(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Option<CharacterMission>, QueueError> {
        self.lock_character(conn).await?;

        let Some(next) = CharacterMissionRepo::find_next_pending(&mut *conn, self.character_id).await?
        else {
            return Ok(None);
        };

        let started = self.mark_in_progress(conn, &next).await?;
        Ok(Some(started))
    }

    /// Complete the head of the queue.
    ///
    /// The head may be pending or in progress. Returns `None` on an empty
    /// queue. No experience is awarded here; see
    /// [`crate::progression::award_completion`].
    pub async fn dequeue(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Option<CharacterMission>, QueueError> {
        self.lock_character(conn).await?;

        let Some(head) = self.first(conn).await? else {
            return Ok(None);
        };

        validate_transition(head.status_id, MissionStatus::Completed.id())
            .map_err(CoreError::Conflict)?;

        let completed = CharacterMissionRepo::mark_completed(&mut *conn, head.id)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!(
                    "Queue slot {} changed state while completing",
                    head.id
                ))
            })?;

        tracing::info!(
            character_id = self.character_id,
            mission_id = completed.mission_id,
            queue_position = completed.queue_position,
            slot_id = completed.id,
            "Mission completed",
        );
        Ok(Some(completed))
    }

    /// Every slot for the character, any status, in queue order.
    pub async fn get_all(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<CharacterMission>, QueueError> {
        Ok(CharacterMissionRepo::list_by_character(conn, self.character_id).await?)
    }

    /// Start the head, which the caller names by mission.
    ///
    /// Fails with `NotFound` on an empty queue and with `Conflict` when the
    /// head is a different mission or is already in progress. Restarting an
    /// in-progress head is rejected rather than treated as a no-op, so
    /// `accepted_at` and the slot state are left untouched.
    pub async fn start_head(
        &self,
        conn: &mut PgConnection,
        mission_id: DbId,
    ) -> Result<CharacterMission, QueueError> {
        self.lock_character(conn).await?;

        let head = self.first(conn).await?.ok_or_else(|| self.empty_queue())?;

        if head.mission_id != mission_id {
            return Err(CoreError::Conflict(format!(
                "Mission {mission_id} is not the next in queue. Next mission ID: {}",
                head.mission_id
            ))
            .into());
        }
        if head.status_id == MissionStatus::InProgress.id() {
            return Err(
                CoreError::Conflict(format!("Mission {mission_id} is already in progress")).into(),
            );
        }

        self.mark_in_progress(conn, &head).await
    }

    /// Complete the in-progress slot for a named mission.
    ///
    /// Fails with `Validation` when the mission is not in progress for this
    /// character and with `Conflict` when it is in progress but not at the
    /// head (another slot was accepted earlier and is still active).
    pub async fn complete_in_progress(
        &self,
        conn: &mut PgConnection,
        mission_id: DbId,
    ) -> Result<CharacterMission, QueueError> {
        self.lock_character(conn).await?;

        let slot = CharacterMissionRepo::find_in_progress_by_mission(
            &mut *conn,
            self.character_id,
            mission_id,
        )
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Mission {mission_id} is not in progress")))?;

        let head = self.first(conn).await?.ok_or_else(|| self.empty_queue())?;
        if head.id != slot.id {
            return Err(CoreError::Conflict(format!(
                "Mission {mission_id} is not at the head of the queue. Next mission ID: {}",
                head.mission_id
            ))
            .into());
        }

        self.dequeue(conn)
            .await?
            .ok_or_else(|| self.empty_queue().into())
    }

    /// Complete whatever is at the head, pending or in progress.
    ///
    /// Fails with `NotFound` on an empty queue.
    pub async fn complete_head(
        &self,
        conn: &mut PgConnection,
    ) -> Result<CharacterMission, QueueError> {
        self.dequeue(conn)
            .await?
            .ok_or_else(|| self.empty_queue().into())
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn lock_character(&self, conn: &mut PgConnection) -> Result<Character, QueueError> {
        CharacterRepo::find_by_id_for_update(conn, self.character_id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Character",
                    id: self.character_id,
                }
                .into()
            })
    }

    async fn mark_in_progress(
        &self,
        conn: &mut PgConnection,
        slot: &CharacterMission,
    ) -> Result<CharacterMission, QueueError> {
        validate_transition(slot.status_id, MissionStatus::InProgress.id())
            .map_err(CoreError::Conflict)?;

        let started = CharacterMissionRepo::mark_in_progress(conn, slot.id)
            .await?
            .ok_or_else(|| {
                CoreError::Conflict(format!("Queue slot {} is no longer pending", slot.id))
            })?;

        tracing::info!(
            character_id = self.character_id,
            mission_id = started.mission_id,
            queue_position = started.queue_position,
            slot_id = started.id,
            "Mission started",
        );
        Ok(started)
    }

    fn empty_queue(&self) -> CoreError {
        CoreError::NotFound {
            entity: "Queued mission for character",
            id: self.character_id,
        }
    }
}

fn already_accepted(mission_id: DbId) -> CoreError {
    CoreError::Conflict(format!("Mission {mission_id} already accepted"))
}

/// Map unique-constraint races on insert to `Conflict`.
///
/// The character row lock normally prevents both cases; these only fire
/// when `enqueue` runs outside a transaction.
fn classify_insert_error(err: sqlx::Error, mission_id: DbId) -> QueueError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.constraint() {
            Some(ACTIVE_MISSION_CONSTRAINT) => return already_accepted(mission_id).into(),
            Some(POSITION_CONSTRAINT) => {
                return CoreError::Conflict(
                    "Concurrent enqueue for this character; retry".to_string(),
                )
                .into()
            }
            _ => {}
        }
    }
    err.into()
}
