//! Starred Restaurants
//!
//! A small HTTP API for attaching comments ("stars") to restaurants from a
//! read-only directory. Stars live in memory for the life of the process and
//! are joined with the directory on every read.
//!
//! Built with Axum; the core [`StarredRestaurants`] service does no I/O and
//! can be driven directly in tests with a seeded random source.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
#[cfg(feature = "utoipa")]
pub mod openapi;
pub mod seed;
pub mod server;
pub mod starred;
pub mod state;

pub use config::{ConfigOverrides, LogConfig, LogFormat, LogLevel, ServerConfig};
pub use directory::{InMemoryDirectory, RestaurantDirectory, RestaurantRecord};
pub use error::{StarError, StarResult};
pub use seed::SeedData;
pub use starred::{DisplayStar, StarRecord, StarredRestaurants, RESTAURANT_NOT_FOUND};
pub use state::AppState;

/// Load seed data and run the API server until shutdown
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let seed = match &config.seed_file {
        Some(path) => {
            tracing::info!("Seed file: {}", path.display());
            SeedData::from_file(path)?
        }
        None => SeedData::default(),
    };

    let state = AppState::from_seed(seed)?;
    server::run_server(config, state).await
}
