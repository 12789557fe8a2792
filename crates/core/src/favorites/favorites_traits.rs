use async_trait::async_trait;

use super::favorites_model::Favorite;
use crate::assets::AssetCandidate;
use crate::Result;

/// Trait defining the contract for favorites repository operations.
#[async_trait]
pub trait FavoriteRepositoryTrait: Send + Sync {
    fn get_favorites(&self) -> Result<Vec<Favorite>>;
    /// Insert the favorite, or replace an existing entry with the same
    /// coin id in place.
    async fn upsert_favorite(&self, favorite: Favorite) -> Result<Favorite>;
    async fn remove_favorite(&self, coin_id: &str) -> Result<Favorite>;
    /// Replace the whole list. Used by clear-data.
    async fn save_favorites(&self, favorites: &[Favorite]) -> Result<()>;
}

/// Trait defining the contract for the favorites service.
#[async_trait]
pub trait FavoriteServiceTrait: Send + Sync {
    fn get_favorites(&self) -> Result<Vec<Favorite>>;

    /// Resolve a free-text query to candidate coins.
    async fn search_coins(&self, query: &str) -> Result<Vec<AssetCandidate>>;

    /// Fetch the candidate's current price snapshot and store it as a
    /// favorite. A collaborator failure adds nothing.
    async fn add_favorite(&self, candidate: &AssetCandidate) -> Result<Favorite>;

    async fn remove_favorite(&self, coin_id: &str) -> Result<Favorite>;
}
