//! `OpenAPI` document for the HTTP surface

use axum::Json;
use utoipa::OpenApi;

/// `OpenAPI` documentation for the starred restaurants API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Starred Restaurants API",
        version = env!("CARGO_PKG_VERSION"),
        description = "Star restaurants from the directory and keep a comment on each."
    ),
    paths(
        crate::api::starred::list_starred,
        crate::api::starred::get_starred,
        crate::api::starred::create_starred,
        crate::api::starred::update_starred,
        crate::api::starred::delete_starred,
        crate::api::starred::search_restaurants,
        crate::api::starred::random_starred,
        crate::api::starred::health,
        crate::api::restaurants::list_restaurants,
        crate::api::restaurants::get_restaurant,
    ),
    components(
        schemas(
            crate::starred::StarRecord,
            crate::starred::DisplayStar,
            crate::directory::RestaurantRecord,
            crate::api::starred::CreateStarRequest,
            crate::api::starred::UpdateStarRequest,
        )
    ),
    tags(
        (name = "Starred", description = "Starred restaurant operations"),
        (name = "Restaurants", description = "Read-only restaurant directory"),
    ),
)]
pub struct ApiDoc;

/// Returns the generated `OpenAPI` spec.
#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Serve the generated spec as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi())
}
