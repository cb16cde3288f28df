//! API endpoints module

pub mod restaurants;
pub mod starred;

pub use restaurants::{get_restaurant, list_restaurants};
pub use starred::{
    create_starred, delete_starred, get_starred, health, list_starred, random_starred,
    search_restaurants, update_starred, CreateStarRequest, SearchQuery, UpdateStarRequest,
};
