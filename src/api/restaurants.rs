//! Read-only restaurant directory endpoints

use crate::directory::RestaurantRecord;
use crate::error::{StarError, StarResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// List every restaurant in the directory
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/restaurants",
    tag = "Restaurants",
    responses(
        (status = 200, description = "All restaurants", body = Vec<RestaurantRecord>)
    )
))]
pub async fn list_restaurants(State(state): State<AppState>) -> Json<Vec<RestaurantRecord>> {
    let stars = state.stars().await;
    Json(stars.directory().all().to_vec())
}

/// Get one restaurant from the directory
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/restaurants/{id}",
    tag = "Restaurants",
    params(("id" = String, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant", body = RestaurantRecord),
        (status = 404, description = "Restaurant not found")
    )
))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StarResult<Json<RestaurantRecord>> {
    let stars = state.stars().await;
    stars
        .directory()
        .find_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| StarError::not_found("Restaurant not found."))
}
