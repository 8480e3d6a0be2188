use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppResult, OptionExt},
    state::AppState,
    types::CarCreateRequest,
};

/// Create a car for auction. The id and creation timestamp are assigned
/// server-side; the response body is empty.
#[utoipa::path(
    post,
    path = "/car",
    tag = "cars",
    request_body = CarCreateRequest,
    responses(
        (status = 201, description = "Car created"),
        (status = 400, description = "Payload violates field rules"),
        (status = 422, description = "Payload could not be parsed"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CarCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    req.validate()?;
    let id = state.cars.insert(&req).await?;
    tracing::debug!("created car {}", id);
    Ok(StatusCode::CREATED)
}

/// Update a car wholesale. Every required field must be resupplied; the
/// payload is revalidated exactly like on create.
#[utoipa::path(
    put,
    path = "/car/{carId}",
    tag = "cars",
    params(("carId" = String, Path, description = "Id of the car")),
    request_body = CarCreateRequest,
    responses(
        (status = 204, description = "Car updated"),
        (status = 400, description = "Payload violates field rules"),
        (status = 422, description = "Payload could not be parsed"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn update_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
    payload: Result<Json<CarCreateRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload?;
    req.validate()?;
    let affected = state.cars.update(&car_id, &req).await?;
    if affected == 0 {
        // Compatible with the original contract: an unknown id is not
        // distinguished from a successful update.
        tracing::debug!("update matched no row for car {}", car_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a car. Deleting an unknown id returns the same status as deleting
/// an existing one.
#[utoipa::path(
    delete,
    path = "/car/{carId}",
    tag = "cars",
    params(("carId" = String, Path, description = "Id of the car")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let affected = state.cars.delete(&car_id).await?;
    if affected == 0 {
        tracing::debug!("delete matched no row for car {}", car_id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Get a single car by id.
#[utoipa::path(
    get,
    path = "/car/{carId}",
    tag = "cars",
    params(("carId" = String, Path, description = "Id of the car")),
    responses(
        (status = 200, description = "The car", body = crate::types::CarResponse),
        (status = 404, description = "No car with this id"),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(car_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let car = state.cars.fetch_one(&car_id).await?.ok_or_not_found("car")?;
    Ok(Json(car))
}

/// List every car. An empty inventory yields an empty array, never null.
#[utoipa::path(
    get,
    path = "/car",
    tag = "cars",
    responses(
        (status = 200, description = "All cars", body = [crate::types::CarResponse]),
        (status = 500, description = "Persistence failure"),
    )
)]
pub async fn list_cars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cars = state.cars.fetch_all().await?;
    Ok(Json(cars))
}
