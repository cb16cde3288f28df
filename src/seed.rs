//! Startup data for the directory and the star collection

use crate::directory::{InMemoryDirectory, RestaurantRecord};
use crate::error::{StarError, StarResult};
use crate::starred::{StarRecord, StarredRestaurants};
use anyhow::Context;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Restaurants and stars loaded when the process starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub restaurants: Vec<RestaurantRecord>,

    #[serde(default)]
    pub starred: Vec<StarRecord>,
}

impl SeedData {
    /// Load seed data from a TOML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seed: SeedData = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        Ok(seed)
    }

    /// Build the directory and a star collection pre-loaded with `starred`
    pub fn into_service<R: RngCore>(self, rng: R) -> StarResult<StarredRestaurants<R>> {
        if self
            .restaurants
            .iter()
            .any(|restaurant| restaurant.id.is_empty() || restaurant.name.is_empty())
        {
            return Err(StarError::invalid_input(
                "Seeded restaurants need an id and a name.",
            ));
        }

        let directory = Arc::new(InMemoryDirectory::new(self.restaurants));
        let mut stars = StarredRestaurants::with_rng(directory, rng);
        stars.seed(self.starred)?;
        Ok(stars)
    }
}

impl Default for SeedData {
    fn default() -> Self {
        let restaurants = [
            ("869c848c-7a58-4ed6-ab88-72ee2e8e677c", "Pho Palace"),
            ("e8036613-4b72-46f6-ab5e-edd2fc7c4fe4", "Taqueria La Esquina"),
            ("4d3f2a0c-6e1b-4a8e-9c5d-2b7f8e1a9c30", "Joe's Shanghai"),
            ("b1a2c3d4-5e6f-4a7b-8c9d-0e1f2a3b4c5d", "Katz's Delicatessen"),
            ("0f9e8d7c-6b5a-4c3d-8e2f-1a0b9c8d7e6f", "Pho Bang"),
            ("7c6b5a4d-3e2f-4a1b-9c8d-7e6f5a4b3c2d", "Los Tacos No. 1"),
        ]
        .into_iter()
        .map(|(id, name)| RestaurantRecord::new(id, name))
        .collect();

        let starred = vec![StarRecord {
            id: "a7272cd9-26fb-44b5-8d53-9781f55175a1".to_string(),
            restaurant_id: "869c848c-7a58-4ed6-ab88-72ee2e8e677c".to_string(),
            comment: "Best pho in NYC".to_string(),
        }];

        SeedData {
            restaurants,
            starred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_seed_resolves_its_star() {
        let stars = SeedData::default()
            .into_service(StdRng::seed_from_u64(1))
            .unwrap();

        let listed = stars.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Pho Palace");
        assert_eq!(listed[0].comment, "Best pho in NYC");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[restaurants]]
id = "r1"
name = "Pho Palace"

[[starred]]
id = "a1"
restaurantId = "r1"
comment = "Best pho in NYC"
"#
        )
        .unwrap();

        let seed = SeedData::from_file(file.path()).unwrap();
        assert_eq!(seed.restaurants, vec![RestaurantRecord::new("r1", "Pho Palace")]);
        assert_eq!(seed.starred[0].restaurant_id, "r1");
    }

    #[test]
    fn test_from_file_sections_are_optional() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[[restaurants]]\nid = \"r1\"\nname = \"Solo\"\n").unwrap();

        let seed = SeedData::from_file(file.path()).unwrap();
        assert!(seed.starred.is_empty());
        assert_eq!(seed.restaurants.len(), 1);
    }

    #[test]
    fn test_from_missing_file_fails() {
        assert!(SeedData::from_file(Path::new("/definitely/not/here.toml")).is_err());
    }

    #[test]
    fn test_duplicate_seeded_stars_fail() {
        let mut seed = SeedData::default();
        seed.starred.push(seed.starred[0].clone());
        assert!(seed.into_service(StdRng::seed_from_u64(1)).is_err());
    }

    #[test]
    fn test_seeded_restaurant_without_name_fails() {
        let mut seed = SeedData::default();
        seed.restaurants.push(RestaurantRecord::new("r9", ""));

        let err = seed.into_service(StdRng::seed_from_u64(1)).err().unwrap();
        assert!(matches!(err, StarError::InvalidInput(_)));
    }

    #[test]
    fn test_seeded_restaurant_without_id_fails() {
        let seed = SeedData {
            restaurants: vec![RestaurantRecord::new("", "Nameless Noodles")],
            starred: Vec::new(),
        };

        let err = seed.into_service(StdRng::seed_from_u64(1)).err().unwrap();
        assert_eq!(
            err,
            StarError::invalid_input("Seeded restaurants need an id and a name.")
        );
    }
}
