use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::assets::{AssetCandidate, AssetSearchServiceTrait};
use crate::favorites::favorites_model::Favorite;
use crate::favorites::{FavoriteRepositoryTrait, FavoriteServiceTrait};
use crate::Result;

use coinstack_market_data::MarketDataProvider;

/// Service for managing the favorites list.
pub struct FavoritesService {
    favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
    search_service: Arc<dyn AssetSearchServiceTrait>,
    provider: Arc<dyn MarketDataProvider>,
}

impl FavoritesService {
    /// Creates a new FavoritesService instance with injected
    /// dependencies.
    pub fn new(
        favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
        search_service: Arc<dyn AssetSearchServiceTrait>,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            favorite_repository,
            search_service,
            provider,
        }
    }
}

#[async_trait]
impl FavoriteServiceTrait for FavoritesService {
    fn get_favorites(&self) -> Result<Vec<Favorite>> {
        self.favorite_repository.get_favorites()
    }

    async fn search_coins(&self, query: &str) -> Result<Vec<AssetCandidate>> {
        self.search_service.search(query).await
    }

    async fn add_favorite(&self, candidate: &AssetCandidate) -> Result<Favorite> {
        let snapshot = self.provider.get_coin_snapshot(&candidate.id).await?;
        debug!(
            "Adding favorite {} at {} USD ({}% 24h)",
            candidate.id, snapshot.price, snapshot.price_change_24h
        );

        let favorite = Favorite::from_snapshot(candidate, snapshot);
        self.favorite_repository.upsert_favorite(favorite).await
    }

    async fn remove_favorite(&self, coin_id: &str) -> Result<Favorite> {
        self.favorite_repository.remove_favorite(coin_id).await
    }
}
