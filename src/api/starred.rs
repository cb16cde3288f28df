//! Starred restaurant API endpoints

use crate::directory::RestaurantRecord;
use crate::error::{StarError, StarResult};
use crate::starred::{DisplayStar, StarRecord};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Body for starring a restaurant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateStarRequest {
    pub restaurant_id: Option<String>,
    pub comment: Option<String>,
}

/// Body for changing a star's comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct UpdateStarRequest {
    pub comment: Option<String>,
}

/// Query string of the search endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// Unreadable bodies are treated as empty so the usual
/// required-field validation reports them.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!("Ignoring unreadable request body: {}", rejection);
            T::default()
        }
    }
}

/// List all starred restaurants with their names
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/starredRestaurants",
    tag = "Starred",
    responses(
        (status = 200, description = "Starred restaurants", body = Vec<DisplayStar>)
    )
))]
pub async fn list_starred(State(state): State<AppState>) -> Json<Vec<DisplayStar>> {
    let stars = state.stars().await;
    Json(stars.list())
}

/// Get one starred restaurant
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/starredRestaurants/{id}",
    tag = "Starred",
    params(("id" = String, Path, description = "Starred restaurant id")),
    responses(
        (status = 200, description = "Starred restaurant", body = DisplayStar),
        (status = 404, description = "Starred restaurant not found")
    )
))]
pub async fn get_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StarResult<Json<DisplayStar>> {
    let stars = state.stars().await;
    Ok(Json(stars.get(&id)?))
}

/// Star a restaurant
#[cfg_attr(feature = "utoipa", utoipa::path(
    post,
    path = "/starredRestaurants",
    tag = "Starred",
    request_body = CreateStarRequest,
    responses(
        (status = 201, description = "Star created", body = StarRecord),
        (status = 400, description = "restaurantId or comment missing"),
        (status = 404, description = "Restaurant not in the directory")
    )
))]
pub async fn create_starred(
    State(state): State<AppState>,
    payload: Result<Json<CreateStarRequest>, JsonRejection>,
) -> StarResult<(StatusCode, Json<StarRecord>)> {
    let request = body_or_default(payload);
    let restaurant_id = request.restaurant_id.unwrap_or_default();
    let comment = request.comment.unwrap_or_default();

    let mut stars = state.stars().await;
    let record = stars.create(&restaurant_id, &comment)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace the comment of a starred restaurant
#[cfg_attr(feature = "utoipa", utoipa::path(
    put,
    path = "/starredRestaurants/{id}",
    tag = "Starred",
    params(("id" = String, Path, description = "Starred restaurant id")),
    request_body = UpdateStarRequest,
    responses(
        (status = 200, description = "Comment updated", body = String),
        (status = 400, description = "comment missing"),
        (status = 404, description = "Starred restaurant not found")
    )
))]
pub async fn update_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateStarRequest>, JsonRejection>,
) -> StarResult<String> {
    let comment = body_or_default(payload).comment.unwrap_or_default();

    let mut stars = state.stars().await;
    stars.update(&id, &comment)?;
    Ok(format!("Comment updated for restaurant with id: {}", id))
}

/// Remove a starred restaurant
#[cfg_attr(feature = "utoipa", utoipa::path(
    delete,
    path = "/starredRestaurants/{id}",
    tag = "Starred",
    params(("id" = String, Path, description = "Starred restaurant id")),
    responses(
        (status = 200, description = "Star deleted", body = String),
        (status = 404, description = "Starred restaurant not found")
    )
))]
pub async fn delete_starred(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StarResult<&'static str> {
    let mut stars = state.stars().await;
    stars.delete(&id)?;
    Ok("Starred restaurant successfully deleted.")
}

/// Search the restaurant directory by name
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/starredRestaurants/search",
    tag = "Starred",
    params(("name" = String, Query, description = "Case-insensitive name fragment")),
    responses(
        (status = 200, description = "Matching restaurants", body = Vec<RestaurantRecord>),
        (status = 400, description = "name query parameter missing"),
        (status = 404, description = "No restaurants found")
    )
))]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> StarResult<Json<Vec<RestaurantRecord>>> {
    let name = query
        .name
        .ok_or_else(|| StarError::invalid_input("A name query parameter is required."))?;

    let stars = state.stars().await;
    Ok(Json(stars.search(&name)?))
}

/// Pick a random starred restaurant
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/starredRestaurants/random",
    tag = "Starred",
    responses(
        (status = 200, description = "A starred restaurant", body = StarRecord),
        (status = 404, description = "No starred restaurants available")
    )
))]
pub async fn random_starred(State(state): State<AppState>) -> StarResult<Json<StarRecord>> {
    let mut stars = state.stars().await;
    Ok(Json(stars.random()?))
}

/// Liveness probe
#[cfg_attr(feature = "utoipa", utoipa::path(
    get,
    path = "/starredRestaurants/health",
    tag = "Starred",
    responses(
        (status = 200, description = "Server is up", body = String)
    )
))]
pub async fn health() -> &'static str {
    "Server is healthy and running!"
}
