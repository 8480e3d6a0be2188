#[cfg(test)]
mod tests {
    use sqlx::migrate::MigrateDatabase;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::Row;
    use tempfile::NamedTempFile;
    use uuid::Uuid;

    use crate::db;

    async fn setup_test_db() -> sqlx::SqlitePool {
        let temp_db = NamedTempFile::new().unwrap();
        let db_url = format!("sqlite:{}", temp_db.path().display());

        sqlx::Sqlite::create_database(&db_url).await.unwrap();

        let pool = SqlitePoolOptions::new().max_connections(1).connect(&db_url).await.unwrap();

        db::init_db(&pool).await.unwrap();

        pool
    }

    #[tokio::test]
    async fn test_init_db_creates_cars_table() {
        let pool = setup_test_db().await;

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
                .fetch_all(&pool)
                .await
                .unwrap();

        assert!(tables.contains(&"cars".to_string()));
    }

    #[tokio::test]
    async fn test_init_db_is_idempotent() {
        let pool = setup_test_db().await;
        db::init_db(&pool).await.unwrap();
        db::init_db(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_database_assigns_creation_timestamp() {
        let pool = setup_test_db().await;

        sqlx::query(
            "INSERT INTO cars (id, color, price_in_cents, max_speed_mph, max_speed_kmp, vendor_name, model_name)
             VALUES (?1, '#ffb7d5', 1000000, 140, 224, 'Mazda', 'Mx-5')",
        )
        .bind(Uuid::new_v4().to_string())
        .execute(&pool)
        .await
        .unwrap();

        let row = sqlx::query("SELECT date_created_at FROM cars").fetch_one(&pool).await.unwrap();
        let stamp: String = row.get("date_created_at");
        assert!(stamp.contains('T'));
        assert!(stamp.ends_with('Z'));
    }

    #[tokio::test]
    async fn test_run_migration_file() {
        let pool = setup_test_db().await;

        let script = NamedTempFile::new().unwrap();
        std::fs::write(
            script.path(),
            "CREATE TABLE IF NOT EXISTS extras (id TEXT PRIMARY KEY);\n\
             CREATE INDEX IF NOT EXISTS idx_extras_id ON extras(id);\n",
        )
        .unwrap();

        let path = script.path().to_string_lossy().to_string();
        db::run_migration_file(&pool, &path).await.unwrap();
        // Idempotent scripts can run twice
        db::run_migration_file(&pool, &path).await.unwrap();

        let tables: Vec<String> =
            sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table'")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert!(tables.contains(&"extras".to_string()));
    }

    #[tokio::test]
    async fn test_run_migration_file_missing_script_errors() {
        let pool = setup_test_db().await;
        let result = db::run_migration_file(&pool, "does/not/exist.sql").await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot read migration script"));
    }
}
