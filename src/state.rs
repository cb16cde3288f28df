//! Application state shared across all handlers

use crate::error::StarResult;
use crate::seed::SeedData;
use crate::starred::StarredRestaurants;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Global application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The star collection and its directory.
    ///
    /// One lock guards both, so a join never sees a half-applied mutation.
    stars: Arc<Mutex<StarredRestaurants>>,
}

impl AppState {
    pub fn new(stars: StarredRestaurants) -> Self {
        AppState {
            stars: Arc::new(Mutex::new(stars)),
        }
    }

    /// Build state from seed data with an OS-seeded random source
    pub fn from_seed(seed: SeedData) -> StarResult<Self> {
        Self::from_seed_with_rng(seed, StdRng::from_os_rng())
    }

    /// Build state from seed data with a caller-supplied random source
    pub fn from_seed_with_rng(seed: SeedData, rng: StdRng) -> StarResult<Self> {
        let stars = seed.into_service(rng)?;
        tracing::info!(
            "Loaded {} restaurants and {} starred restaurants",
            stars.directory().all().len(),
            stars.len()
        );
        Ok(Self::new(stars))
    }

    /// Lock the star collection for the duration of one operation
    pub async fn stars(&self) -> MutexGuard<'_, StarredRestaurants> {
        self.stars.lock().await
    }
}
