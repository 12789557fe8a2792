use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::assets::{AssetCandidate, AssetSearchServiceTrait};
use crate::constants::MAX_SEARCH_RESULTS;
use crate::errors::ValidationError;
use crate::Result;

use coinstack_market_data::MarketDataProvider;

/// Resolves free-text queries against the market data collaborator.
pub struct AssetSearchService {
    provider: Arc<dyn MarketDataProvider>,
}

impl AssetSearchService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AssetSearchServiceTrait for AssetSearchService {
    async fn search(&self, query: &str) -> Result<Vec<AssetCandidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::MissingField("query".to_string()).into());
        }

        let results = self.provider.search_coins(query).await?;
        debug!(
            "Search '{}' resolved {} candidates, keeping at most {}",
            query,
            results.len(),
            MAX_SEARCH_RESULTS
        );

        Ok(results
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .map(AssetCandidate::from)
            .collect())
    }
}
