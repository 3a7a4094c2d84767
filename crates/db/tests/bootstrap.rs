use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    questboard_db::health_check(&pool).await.unwrap();

    for table in ["characters", "missions", "character_missions"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Seed IDs must line up with the status constants in `questboard_core`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mission_status_seed_matches_constants(pool: PgPool) {
    use questboard_core::mission_queue::{
        state_machine::status_name, STATUS_COMPLETED, STATUS_IN_PROGRESS, STATUS_PENDING,
    };

    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM mission_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();

    assert_eq!(rows.len(), 3);
    for (id, name) in rows {
        assert!([STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_COMPLETED].contains(&id));
        assert_eq!(status_name(id), name);
    }
}
