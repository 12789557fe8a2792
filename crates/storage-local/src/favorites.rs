//! Favorites repository backed by the local blob store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::store::{LocalStore, FAVORITES_STORE_KEY};
use coinstack_core::errors::Result;
use coinstack_core::favorites::{Favorite, FavoriteRepositoryTrait};

pub struct FavoriteRepository {
    store: Arc<LocalStore>,
}

impl FavoriteRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        FavoriteRepository { store }
    }

    fn load(&self) -> Result<Vec<Favorite>> {
        Ok(self
            .store
            .get_json::<Vec<Favorite>>(FAVORITES_STORE_KEY)
            .map_err(StorageError::from)?
            .unwrap_or_default())
    }

    fn save(&self, favorites: &[Favorite]) -> Result<()> {
        self.store
            .set_json(FAVORITES_STORE_KEY, &favorites)
            .map_err(StorageError::from)?;
        Ok(())
    }
}

// Implement the trait for FavoriteRepository
#[async_trait]
impl FavoriteRepositoryTrait for FavoriteRepository {
    fn get_favorites(&self) -> Result<Vec<Favorite>> {
        self.load()
    }

    async fn upsert_favorite(&self, favorite: Favorite) -> Result<Favorite> {
        let mut favorites = self.load()?;
        match favorites.iter_mut().find(|f| f.id == favorite.id) {
            Some(existing) => *existing = favorite.clone(),
            None => favorites.push(favorite.clone()),
        }
        self.save(&favorites)?;
        Ok(favorite)
    }

    async fn remove_favorite(&self, coin_id: &str) -> Result<Favorite> {
        let mut favorites = self.load()?;
        let position = favorites
            .iter()
            .position(|f| f.id == coin_id)
            .ok_or_else(|| StorageError::KeyNotFound(format!("favorite {}", coin_id)))?;
        let removed = favorites.remove(position);
        self.save(&favorites)?;
        Ok(removed)
    }

    async fn save_favorites(&self, favorites: &[Favorite]) -> Result<()> {
        self.save(favorites)
    }
}
