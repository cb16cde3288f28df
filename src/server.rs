//! Axum server setup

use crate::{api, state::AppState, ServerConfig};
use axum::{
    http::{Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with every endpoint attached to `state`
pub fn build_router(state: AppState) -> Router {
    let app = Router::new()
        // Starred restaurants. Static segments win over `:id`.
        .route(
            "/starredRestaurants",
            get(api::list_starred).post(api::create_starred),
        )
        .route("/starredRestaurants/search", get(api::search_restaurants))
        .route("/starredRestaurants/random", get(api::random_starred))
        .route("/starredRestaurants/health", get(api::health))
        .route(
            "/starredRestaurants/:id",
            get(api::get_starred)
                .put(api::update_starred)
                .delete(api::delete_starred),
        )
        // Directory (read-only)
        .route("/restaurants", get(api::list_restaurants))
        .route("/restaurants/:id", get(api::get_restaurant));

    #[cfg(feature = "utoipa")]
    let app = app.route("/api-docs/openapi.json", get(crate::openapi::openapi_json));

    app.fallback(|| async {
        (
            StatusCode::NOT_FOUND,
            "Starred Restaurants API - endpoints live under /starredRestaurants",
        )
    })
    .layer(
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn run_server(config: ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    tracing::info!("Starred restaurants listening on http://{}", addr);
    tracing::info!("   Health: http://{}/starredRestaurants/health", addr);
    #[cfg(feature = "utoipa")]
    tracing::info!("   API docs: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
