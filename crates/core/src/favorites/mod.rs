//! Favorites module - domain models, service, and traits.

mod favorites_model;
mod favorites_service;
mod favorites_traits;


pub use favorites_model::Favorite;
pub use favorites_service::FavoritesService;
pub use favorites_traits::{FavoriteRepositoryTrait, FavoriteServiceTrait};
