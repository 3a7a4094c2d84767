//! Repository for the `characters` table.

use questboard_core::mission_queue::ACTIVE_STATUSES;
use questboard_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::character::{Character, CreateCharacter};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, level, experience, created_at, updated_at";

/// Provides CRUD operations for characters plus progression updates.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters (name, level, experience)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.level)
            .bind(input.experience)
            .fetch_one(pool)
            .await
    }

    /// Find a character by its internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a character and take a row lock until the surrounding
    /// transaction ends.
    ///
    /// Every queue mutation for a character locks this row first, which
    /// serialises position assignment and head transitions per character
    /// while leaving other characters untouched.
    pub async fn find_by_id_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List characters ordered by ID with pagination.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM characters
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Persist a new level and experience total.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_progress<'e, E>(
        executor: E,
        id: DbId,
        level: i32,
        experience: i32,
    ) -> Result<Option<Character>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE characters SET level = $2, experience = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(level)
            .bind(experience)
            .fetch_optional(executor)
            .await
    }

    /// Count a character's queue slots: `(total ever created, active)`.
    pub async fn slot_counts(pool: &PgPool, id: DbId) -> Result<(i64, i64), sqlx::Error> {
        sqlx::query_as::<_, (i64, i64)>(
            "SELECT COUNT(*), \
                    COUNT(*) FILTER (WHERE status_id IN ($2, $3)) \
             FROM character_missions WHERE character_id = $1",
        )
        .bind(id)
        .bind(ACTIVE_STATUSES[0])
        .bind(ACTIVE_STATUSES[1])
        .fetch_one(pool)
        .await
    }
}
