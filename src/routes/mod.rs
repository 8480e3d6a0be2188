//! HTTP route handlers for the Carlot API.
//!
//! - `cars`: CRUD endpoints over the car inventory
//! - `health`: health check and system status endpoints

pub mod cars;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::docs;
use crate::state::AppState;

/// Builds the route table: a static mapping from (method, path) to handler.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/version", get(health::version))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .route("/car", post(cars::create_car).get(cars::list_cars))
        .route("/car/{carId}", get(cars::get_car).put(cars::update_car).delete(cars::delete_car))
        .with_state(state)
}
