use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::CarStore;

/// The shared application state.
///
/// Cloneable for use with Axum's request extraction; everything inside is
/// either a pool handle or immutable configuration, so handlers stay
/// state-free between calls.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: sqlx::SqlitePool,
    /// The persistence gateway for the `cars` table.
    pub cars: CarStore,
    /// The application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self { cars: CarStore::new(db.clone()), db, config: Arc::new(config) }
    }
}
