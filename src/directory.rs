//! Read-only restaurant directory
//!
//! The star collection resolves restaurant names and validates references
//! through [`RestaurantDirectory`]. Nothing in this crate writes to it after
//! construction.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A restaurant as known to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct RestaurantRecord {
    pub id: String,
    pub name: String,
}

impl RestaurantRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        RestaurantRecord {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup surface the star collection depends on
pub trait RestaurantDirectory: Send + Sync {
    /// Find a restaurant by its id
    fn find_by_id(&self, id: &str) -> Option<&RestaurantRecord>;

    /// All restaurants, in directory order
    fn all(&self) -> &[RestaurantRecord];
}

/// Directory backed by a vector with an id index
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    restaurants: Vec<RestaurantRecord>,
    by_id: HashMap<String, usize>,
}

impl InMemoryDirectory {
    pub fn new(restaurants: Vec<RestaurantRecord>) -> Self {
        let mut by_id = HashMap::with_capacity(restaurants.len());
        for (position, restaurant) in restaurants.iter().enumerate() {
            // First occurrence wins, same as a linear scan would.
            by_id.entry(restaurant.id.clone()).or_insert(position);
        }

        InMemoryDirectory { restaurants, by_id }
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}

impl RestaurantDirectory for InMemoryDirectory {
    fn find_by_id(&self, id: &str) -> Option<&RestaurantRecord> {
        self.by_id
            .get(id)
            .and_then(|&position| self.restaurants.get(position))
    }

    fn all(&self) -> &[RestaurantRecord] {
        &self.restaurants
    }
}

impl FromIterator<RestaurantRecord> for InMemoryDirectory {
    fn from_iter<I: IntoIterator<Item = RestaurantRecord>>(iter: I) -> Self {
        InMemoryDirectory::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryDirectory {
        InMemoryDirectory::new(vec![
            RestaurantRecord::new("r1", "Pho Palace"),
            RestaurantRecord::new("r2", "Taco Town"),
        ])
    }

    #[test]
    fn test_find_by_id() {
        let directory = sample();
        assert_eq!(
            directory.find_by_id("r2").map(|r| r.name.as_str()),
            Some("Taco Town")
        );
        assert!(directory.find_by_id("missing").is_none());
    }

    #[test]
    fn test_all_preserves_order() {
        let directory = sample();
        let ids: Vec<&str> = directory.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2"]);
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let directory: InMemoryDirectory = vec![
            RestaurantRecord::new("r1", "First"),
            RestaurantRecord::new("r1", "Second"),
        ]
        .into_iter()
        .collect();

        assert_eq!(directory.find_by_id("r1").unwrap().name, "First");
        assert_eq!(directory.all().len(), 2);
    }

    #[test]
    fn test_empty_directory() {
        let directory = InMemoryDirectory::default();
        assert!(directory.is_empty());
        assert!(directory.find_by_id("r1").is_none());
    }
}
