//! Repository for the `character_missions` table (queue slots).
//!
//! Head-finding is split into two deliberately separate queries:
//! [`CharacterMissionRepo::find_head`] looks at every active slot
//! (pending or in progress), while [`CharacterMissionRepo::find_next_pending`]
//! only looks at pending ones.

use questboard_core::mission_queue::ACTIVE_STATUSES;
use questboard_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::character_mission::{CharacterMission, QueueEntry};
use crate::models::status::MissionStatus;

/// Column list for `character_missions` queries.
const COLUMNS: &str = "\
    id, character_id, mission_id, queue_position, status_id, \
    accepted_at, completed_at";

/// Provides slot storage and lookups for the mission queue.
pub struct CharacterMissionRepo;

impl CharacterMissionRepo {
    /// Insert a pending slot at `queue_position`. `accepted_at` defaults to now.
    pub async fn insert<'e, E>(
        executor: E,
        character_id: DbId,
        mission_id: DbId,
        queue_position: i32,
    ) -> Result<CharacterMission, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO character_missions (character_id, mission_id, queue_position, status_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .bind(mission_id)
            .bind(queue_position)
            .bind(MissionStatus::Pending.id())
            .fetch_one(executor)
            .await
    }

    /// The active slot with the lowest queue position, if any.
    pub async fn find_head<'e, E>(
        executor: E,
        character_id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM character_missions \
             WHERE character_id = $1 AND status_id IN ($2, $3) \
             ORDER BY queue_position ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .bind(ACTIVE_STATUSES[0])
            .bind(ACTIVE_STATUSES[1])
            .fetch_optional(executor)
            .await
    }

    /// The pending slot with the lowest queue position, if any.
    ///
    /// In-progress slots are skipped, so this may return a slot behind the
    /// head.
    pub async fn find_next_pending<'e, E>(
        executor: E,
        character_id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM character_missions \
             WHERE character_id = $1 AND status_id = $2 \
             ORDER BY queue_position ASC \
             LIMIT 1"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .bind(MissionStatus::Pending.id())
            .fetch_optional(executor)
            .await
    }

    /// The active slot for `(character, mission)`, if one exists.
    pub async fn find_active_by_mission<'e, E>(
        executor: E,
        character_id: DbId,
        mission_id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM character_missions \
             WHERE character_id = $1 AND mission_id = $2 AND status_id IN ($3, $4)"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .bind(mission_id)
            .bind(ACTIVE_STATUSES[0])
            .bind(ACTIVE_STATUSES[1])
            .fetch_optional(executor)
            .await
    }

    /// The in-progress slot for `(character, mission)`, if one exists.
    pub async fn find_in_progress_by_mission<'e, E>(
        executor: E,
        character_id: DbId,
        mission_id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM character_missions \
             WHERE character_id = $1 AND mission_id = $2 AND status_id = $3"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .bind(mission_id)
            .bind(MissionStatus::InProgress.id())
            .fetch_optional(executor)
            .await
    }

    /// All slots for a character, any status, ordered by queue position.
    pub async fn list_by_character<'e, E>(
        executor: E,
        character_id: DbId,
    ) -> Result<Vec<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM character_missions \
             WHERE character_id = $1 \
             ORDER BY queue_position ASC"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(character_id)
            .fetch_all(executor)
            .await
    }

    /// All slots for a character joined with the mission catalog, ordered
    /// by queue position.
    pub async fn list_queue_view(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<QueueEntry>, sqlx::Error> {
        sqlx::query_as::<_, QueueEntry>(
            "SELECT cm.id, cm.character_id, c.name AS character_name, \
                    cm.mission_id, m.title, m.description, m.xp_reward, m.difficulty, \
                    cm.queue_position, cm.status_id, cm.accepted_at, cm.completed_at \
             FROM character_missions cm \
             JOIN missions m ON m.id = cm.mission_id \
             JOIN characters c ON c.id = cm.character_id \
             WHERE cm.character_id = $1 \
             ORDER BY cm.queue_position ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }

    /// Number of active slots for a character.
    pub async fn count_active<'e, E>(executor: E, character_id: DbId) -> Result<i64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM character_missions \
             WHERE character_id = $1 AND status_id IN ($2, $3)",
        )
        .bind(character_id)
        .bind(ACTIVE_STATUSES[0])
        .bind(ACTIVE_STATUSES[1])
        .fetch_one(executor)
        .await
    }

    /// Highest queue position ever assigned to a character, including
    /// completed slots. `None` when the character has no slots.
    pub async fn max_position<'e, E>(
        executor: E,
        character_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(queue_position) FROM character_missions WHERE character_id = $1",
        )
        .bind(character_id)
        .fetch_one(executor)
        .await
    }

    /// Move a pending slot to in progress.
    ///
    /// Returns `None` if the slot does not exist or is not pending.
    pub async fn mark_in_progress<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE character_missions SET status_id = $2 \
             WHERE id = $1 AND status_id = $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(id)
            .bind(MissionStatus::InProgress.id())
            .bind(MissionStatus::Pending.id())
            .fetch_optional(executor)
            .await
    }

    /// Complete an active slot, stamping `completed_at`.
    ///
    /// Returns `None` if the slot does not exist or is already completed.
    pub async fn mark_completed<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<CharacterMission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE character_missions SET status_id = $2, completed_at = NOW() \
             WHERE id = $1 AND status_id IN ($3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterMission>(&query)
            .bind(id)
            .bind(MissionStatus::Completed.id())
            .bind(ACTIVE_STATUSES[0])
            .bind(ACTIVE_STATUSES[1])
            .fetch_optional(executor)
            .await
    }
}
