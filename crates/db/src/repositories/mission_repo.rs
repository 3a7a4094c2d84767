//! Repository for the `missions` catalog.

use questboard_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::mission::{CreateMission, Mission};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, xp_reward, difficulty, created_at, updated_at";

/// Provides create and lookup operations for the mission catalog.
pub struct MissionRepo;

impl MissionRepo {
    /// Insert a new mission, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMission) -> Result<Mission, sqlx::Error> {
        let query = format!(
            "INSERT INTO missions (title, description, xp_reward, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.xp_reward)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Find a mission by its internal ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<Mission>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM missions WHERE id = $1");
        sqlx::query_as::<_, Mission>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List missions ordered by ID with pagination.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Mission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM missions
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Mission>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
