use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema and seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    bci_db::health_check(&pool).await.unwrap();

    // Verify all four lookup tables exist and have seed data
    let tables = [
        "intervention_statuses",
        "instance_statuses",
        "referral_statuses",
        "goal_statuses",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert!(count.0 > 0, "{table} should have seed data, got 0 rows");
    }
}

/// The instance status vocabulary is fixed: four states with known ids.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_instance_status_seed_values(pool: PgPool) {
    let rows: Vec<(i16, String)> =
        sqlx::query_as("SELECT id, name FROM instance_statuses ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();

    let names: Vec<(i16, &str)> = rows.iter().map(|(id, n)| (*id, n.as_str())).collect();
    assert_eq!(
        names,
        vec![
            (1, "not_started"),
            (2, "in_progress"),
            (3, "finished"),
            (4, "abandoned"),
        ]
    );
}

/// Every lifecycle and workflow event name published by the API must be
/// seeded in event_types.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_event_type_seed_covers_published_events(pool: PgPool) {
    let expected = [
        "bci_instance.started",
        "bci_instance.finished",
        "bci_instance.abandoned",
        "phase_instance.started",
        "block_instance.finished",
        "module_instance.abandoned",
        "activity_instance.started",
        "assessment_instance.finished",
        "referral.accepted",
        "referral.declined",
        "referral.completed",
        "goal.achieved",
        "goal.abandoned",
    ];

    for name in expected {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM event_types WHERE name = $1")
                .bind(name)
                .fetch_optional(&pool)
                .await
                .unwrap();
        assert!(found.is_some(), "event type {name} should be seeded");
    }
}
