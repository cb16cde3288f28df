//! Star collection service
//!
//! Owns the starred restaurant records and answers every query against them.
//! Reads are joined against the [`RestaurantDirectory`] so callers see the
//! restaurant name next to the comment. A star whose restaurant has since
//! disappeared from the directory is still listed, under
//! [`RESTAURANT_NOT_FOUND`].

use crate::directory::{RestaurantDirectory, RestaurantRecord};
use crate::error::{StarError, StarResult};
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Display name used when a star references an unknown restaurant
pub const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";

/// A stored star: a comment attached to a restaurant reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StarRecord {
    pub id: String,
    pub restaurant_id: String,
    pub comment: String,
}

/// A star joined with its restaurant's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct DisplayStar {
    pub id: String,
    pub comment: String,
    pub name: String,
}

/// In-memory collection of stars, joined on read against a directory.
///
/// The random source drives both id generation and [`random`](Self::random),
/// so a seeded generator makes the whole service deterministic.
pub struct StarredRestaurants<R = StdRng> {
    directory: Arc<dyn RestaurantDirectory>,
    stars: Vec<StarRecord>,
    rng: R,
}

impl StarredRestaurants<StdRng> {
    /// Create an empty collection drawing randomness from the OS
    pub fn new(directory: Arc<dyn RestaurantDirectory>) -> Self {
        Self::with_rng(directory, StdRng::from_os_rng())
    }
}

impl<R: RngCore> StarredRestaurants<R> {
    pub fn with_rng(directory: Arc<dyn RestaurantDirectory>, rng: R) -> Self {
        StarredRestaurants {
            directory,
            stars: Vec::new(),
            rng,
        }
    }

    /// Load pre-existing records, keeping their ids.
    ///
    /// Seeded references are not checked against the directory; a dangling
    /// one simply renders with the sentinel name.
    pub fn seed<I>(&mut self, records: I) -> StarResult<usize>
    where
        I: IntoIterator<Item = StarRecord>,
    {
        let mut loaded = 0;
        for record in records {
            if record.id.is_empty() || record.comment.is_empty() {
                return Err(StarError::invalid_input(
                    "Seeded starred restaurants need an id and a comment.",
                ));
            }
            if self.position(&record.id).is_some() {
                return Err(StarError::invalid_input(format!(
                    "Duplicate starred restaurant id: {}",
                    record.id
                )));
            }
            self.stars.push(record);
            loaded += 1;
        }
        Ok(loaded)
    }

    pub fn directory(&self) -> &dyn RestaurantDirectory {
        self.directory.as_ref()
    }

    /// Stored records in insertion order
    pub fn records(&self) -> &[StarRecord] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Every star joined with its restaurant name, in insertion order
    pub fn list(&self) -> Vec<DisplayStar> {
        self.stars.iter().map(|star| self.join(star)).collect()
    }

    pub fn get(&self, id: &str) -> StarResult<DisplayStar> {
        self.stars
            .iter()
            .find(|star| star.id == id)
            .map(|star| self.join(star))
            .ok_or_else(star_not_found)
    }

    /// Star a restaurant. Returns the stored record, not its joined view.
    pub fn create(&mut self, restaurant_id: &str, comment: &str) -> StarResult<StarRecord> {
        if restaurant_id.is_empty() || comment.is_empty() {
            return Err(StarError::invalid_input(
                "Both restaurantId and comment are required.",
            ));
        }

        if self.directory.find_by_id(restaurant_id).is_none() {
            tracing::debug!("Rejected star for unknown restaurant {}", restaurant_id);
            return Err(StarError::not_found("Restaurant not found in the main list."));
        }

        let record = StarRecord {
            id: self.next_id(),
            restaurant_id: restaurant_id.to_string(),
            comment: comment.to_string(),
        };
        self.stars.push(record.clone());

        tracing::info!(
            "Starred restaurant {} as {} ({} total)",
            record.restaurant_id,
            record.id,
            self.stars.len()
        );
        Ok(record)
    }

    /// Replace the comment of an existing star; id and restaurant stay put
    pub fn update(&mut self, id: &str, comment: &str) -> StarResult<StarRecord> {
        if comment.is_empty() {
            return Err(StarError::invalid_input("A comment is required."));
        }

        let star = self
            .stars
            .iter_mut()
            .find(|star| star.id == id)
            .ok_or_else(star_not_found)?;
        star.comment = comment.to_string();

        tracing::info!("Updated comment on starred restaurant {}", id);
        Ok(star.clone())
    }

    /// Remove a star, preserving the order of the rest
    pub fn delete(&mut self, id: &str) -> StarResult<StarRecord> {
        let position = self.position(id).ok_or_else(star_not_found)?;
        let removed = self.stars.remove(position);

        tracing::info!(
            "Deleted starred restaurant {} ({} remaining)",
            id,
            self.stars.len()
        );
        Ok(removed)
    }

    /// Case-insensitive substring search over directory names.
    ///
    /// This looks at every restaurant in the directory, starred or not.
    pub fn search(&self, name: &str) -> StarResult<Vec<RestaurantRecord>> {
        let needle = name.to_lowercase();
        let matches: Vec<RestaurantRecord> = self
            .directory
            .all()
            .iter()
            .filter(|restaurant| restaurant.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(StarError::not_found("No restaurants found."));
        }
        Ok(matches)
    }

    /// Pick one stored record uniformly at random
    pub fn random(&mut self) -> StarResult<StarRecord> {
        if self.stars.is_empty() {
            return Err(StarError::not_found("No starred restaurants available."));
        }
        let index = self.rng.random_range(0..self.stars.len());
        Ok(self.stars[index].clone())
    }

    fn join(&self, star: &StarRecord) -> DisplayStar {
        let name = self
            .directory
            .find_by_id(&star.restaurant_id)
            .map(|restaurant| restaurant.name.clone())
            .unwrap_or_else(|| RESTAURANT_NOT_FOUND.to_string());

        DisplayStar {
            id: star.id.clone(),
            comment: star.comment.clone(),
            name,
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.stars.iter().position(|star| star.id == id)
    }

    fn next_id(&mut self) -> String {
        loop {
            let mut bytes = [0u8; 16];
            self.rng.fill_bytes(&mut bytes);
            let id = uuid::Builder::from_random_bytes(bytes)
                .into_uuid()
                .to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

fn star_not_found() -> StarError {
    StarError::not_found("Starred restaurant not found.")
}
