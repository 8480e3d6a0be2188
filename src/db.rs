use sqlx::SqlitePool;

/// Initializes pragmas and the `cars` schema. Safe to call repeatedly.
pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance, best-effort with logging
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(pool).await {
        tracing::warn!("Failed to set busy_timeout: {}", e);
    }

    // cars table - the sole entity, flat schema, no foreign keys.
    // date_created_at is assigned by the database default clock at insert.
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS cars (
            id TEXT PRIMARY KEY,
            color TEXT NOT NULL,
            price_in_cents INTEGER NOT NULL,
            max_speed_mph INTEGER NOT NULL DEFAULT 0,
            max_speed_kmp INTEGER NOT NULL,
            vendor_name TEXT NOT NULL,
            model_name TEXT NOT NULL,
            date_created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ','now'))
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Runs the statements of an external SQL script, one at a time. The script
/// is expected to be idempotent; a failing statement aborts the run.
pub async fn run_migration_file(pool: &SqlitePool, path: &str) -> anyhow::Result<()> {
    let sql = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read migration script {}: {}", path, e))?;

    for statement in sql.split(';') {
        let statement = statement.trim();
        // Skip empty segments and comment-only trailers
        if statement.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with("--")
        }) {
            continue;
        }
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| anyhow::anyhow!("migration statement failed: {}", e))?;
    }

    tracing::info!("Applied migration script {}", path);
    Ok(())
}
