//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CoinSearchResult, CoinSnapshot, PriceSnapshot};

/// Trait for coin market data sources.
///
/// Implement this trait to back the application with a different price
/// collaborator. All calls are single request/response fetches with no
/// retry policy; a failure is terminal for the triggering action.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// A constant string like "COINGECKO", used in logging and error
    /// messages.
    fn id(&self) -> &'static str;

    /// Search for coins matching a free-text query.
    ///
    /// Returns candidates in provider relevance order. Truncation to a
    /// display limit is the caller's concern.
    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSearchResult>, MarketDataError>;

    /// Fetch current USD spot prices for a batch of coin ids.
    ///
    /// An empty result mapping is reported as
    /// [`MarketDataError::EmptyPriceData`]; a snapshot that covers only
    /// some of the requested ids is returned as-is.
    async fn get_latest_prices(&self, coin_ids: &[String])
        -> Result<PriceSnapshot, MarketDataError>;

    /// Fetch the current price and 24h change for a single coin.
    async fn get_coin_snapshot(&self, coin_id: &str) -> Result<CoinSnapshot, MarketDataError>;
}
