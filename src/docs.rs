//! OpenAPI document assembly.
//!
//! Pure metadata driven by the `#[utoipa::path]` annotations on the car
//! handlers; served as JSON at `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::types::{CarCreateRequest, CarResponse};

#[derive(OpenApi)]
#[openapi(
    info(title = "Carlot API", description = "Car auction app"),
    paths(
        crate::routes::cars::create_car,
        crate::routes::cars::update_car,
        crate::routes::cars::delete_car,
        crate::routes::cars::get_car,
        crate::routes::cars::list_cars,
    ),
    components(schemas(CarCreateRequest, CarResponse)),
    tags((name = "cars", description = "CRUD operations over the car inventory"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
