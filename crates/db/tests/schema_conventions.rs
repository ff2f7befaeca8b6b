use sqlx::PgPool;

/// All `id` columns must be bigint (entity tables) or smallint (lookup tables).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_correct_type(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert!(
            data_type == "bigint" || data_type == "smallint",
            "Table {table}.id should be bigint or smallint, got {data_type}"
        );
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at
/// as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let data_type = result
                .unwrap_or_else(|| panic!("Table {table} is missing column {col}"))
                .0;
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz"
            );
        }
    }
}

/// updated_at must move on UPDATE via the set_updated_at trigger.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger_fires(pool: PgPool) {
    let (id, created, updated): (i64, chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as(
            "INSERT INTO actors (first_name, last_name) VALUES ('Trigger', 'Test')
             RETURNING id, created_at, updated_at",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(created, updated);

    // pg_sleep so the trigger stamp is measurably newer.
    sqlx::query("SELECT pg_sleep(0.01)").execute(&pool).await.unwrap();

    let (new_updated,): (chrono::DateTime<chrono::Utc>,) = sqlx::query_as(
        "UPDATE actors SET phone = '123' WHERE id = $1 RETURNING updated_at",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert!(new_updated > updated);
}

/// Every *_instances table carries the shared lifecycle columns.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_instance_tables_share_lifecycle_columns(pool: PgPool) {
    let tables = [
        "bci_instances",
        "bci_phase_instances",
        "bci_block_instances",
        "bci_module_instances",
        "bci_activity_instances",
        "assessment_instances",
    ];

    for table in tables {
        for col in ["status_id", "entered_at", "exited_at", "version"] {
            let found: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT column_name
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();
            assert!(found.is_some(), "Table {table} is missing column {col}");
        }
    }
}
