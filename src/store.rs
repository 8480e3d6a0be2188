use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use uuid::Uuid;

use crate::types::{CarCreateRequest, CarResponse};

/// The persistence gateway for the `cars` table.
///
/// Every statement is parameterized; SQL syntax never leaves this module.
/// Callers are expected to validate payloads before handing them in - the
/// NOT NULL constraints back that invariant at the storage layer.
#[derive(Clone)]
pub struct CarStore {
    pool: SqlitePool,
}

impl CarStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a validated payload under a freshly generated id and returns
    /// that id. `date_created_at` is assigned by the database default clock.
    pub async fn insert(&self, req: &CarCreateRequest) -> Result<String, sqlx::Error> {
        let id = Uuid::new_v4().to_string();
        sqlx::query(
            r#"INSERT INTO cars (id, color, price_in_cents, max_speed_mph, max_speed_kmp, vendor_name, model_name)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"#,
        )
        .bind(&id)
        .bind(req.color.as_deref())
        .bind(req.price_in_cents)
        .bind(req.max_speed_mph.unwrap_or(0))
        .bind(req.max_speed_kmp)
        .bind(req.vendor_name.as_deref())
        .bind(req.model_name.as_deref())
        .execute(&self.pool)
        .await?;
        Ok(id)
    }

    /// Updates all six mutable fields keyed by id and returns the number of
    /// affected rows. Existence is not verified first; zero rows is a valid
    /// outcome, not an error.
    pub async fn update(&self, id: &str, req: &CarCreateRequest) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"UPDATE cars SET color = ?1, price_in_cents = ?2, max_speed_mph = ?3, max_speed_kmp = ?4, vendor_name = ?5, model_name = ?6
               WHERE id = ?7"#,
        )
        .bind(req.color.as_deref())
        .bind(req.price_in_cents)
        .bind(req.max_speed_mph.unwrap_or(0))
        .bind(req.max_speed_kmp)
        .bind(req.vendor_name.as_deref())
        .bind(req.model_name.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Hard-deletes by id and returns the number of affected rows. Zero rows
    /// is a valid outcome, not an error.
    pub async fn delete(&self, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?1").bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Fetches a single car by id, `None` when no row matches.
    pub async fn fetch_one(&self, id: &str) -> Result<Option<CarResponse>, sqlx::Error> {
        let row = sqlx::query(
            r#"SELECT id, color, price_in_cents, max_speed_mph, max_speed_kmp, vendor_name, model_name, date_created_at
               FROM cars WHERE id = ?1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(map_car_row).transpose()
    }

    /// Fetches every car. A row that fails to decode is skipped instead of
    /// aborting the whole list; the skip count is logged so the loss stays
    /// visible. An empty table yields an empty vec.
    pub async fn fetch_all(&self) -> Result<Vec<CarResponse>, sqlx::Error> {
        let rows = sqlx::query(
            r#"SELECT id, color, price_in_cents, max_speed_mph, max_speed_kmp, vendor_name, model_name, date_created_at
               FROM cars"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut cars = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for row in &rows {
            match map_car_row(row) {
                Ok(car) => cars.push(car),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!("skipping undecodable car row: {}", e);
                }
            }
        }
        if skipped > 0 {
            tracing::warn!("car list fetch skipped {} undecodable rows", skipped);
        }
        Ok(cars)
    }
}

/// Maps one `cars` row into the response shape
/// `(id, color, price_in_cents, max_speed_mph, max_speed_kmp, vendor_name, model_name, date_created_at)`.
fn map_car_row(row: &SqliteRow) -> Result<CarResponse, sqlx::Error> {
    Ok(CarResponse {
        id: row.try_get("id")?,
        color: row.try_get("color")?,
        price_in_cents: row.try_get("price_in_cents")?,
        max_speed_mph: row.try_get("max_speed_mph")?,
        max_speed_kmp: row.try_get("max_speed_kmp")?,
        vendor_name: row.try_get("vendor_name")?,
        model_name: row.try_get("model_name")?,
        date_created_at: row.try_get("date_created_at")?,
    })
}
