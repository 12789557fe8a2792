//! Per-coin detail models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Price data extracted from a `/coins/{id}` detail response.
///
/// Captured once when a coin is added to the favorites list; there is
/// no background refresh of favorite prices.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoinSnapshot {
    /// Current spot price in USD
    pub price: Decimal,

    /// Percentage change over the trailing 24 hours
    pub price_change_24h: Decimal,
}

/// Envelope returned by the `/coins/{id}` endpoint.
///
/// The full payload is large; only the `market_data` subtree is
/// consumed, and of that only the USD spot price and the 24h change.
#[derive(Debug, Deserialize)]
pub struct CoinDetailResponse {
    pub id: String,
    pub market_data: Option<MarketData>,
}

#[derive(Debug, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: HashMap<String, Decimal>,
    pub price_change_percentage_24h: Option<Decimal>,
}

impl CoinDetailResponse {
    /// Reduce the detail payload to the snapshot the application needs.
    ///
    /// A payload without market data (delisted or preview coins) is a
    /// provider error, not a zero price.
    pub fn into_snapshot(self, provider: &str) -> Result<CoinSnapshot, MarketDataError> {
        let market_data = self
            .market_data
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: provider.to_string(),
                message: format!("no market data for coin '{}'", self.id),
            })?;

        let price = market_data
            .current_price
            .get("usd")
            .copied()
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: provider.to_string(),
                message: format!("no USD price for coin '{}'", self.id),
            })?;

        Ok(CoinSnapshot {
            price,
            price_change_24h: market_data
                .price_change_percentage_24h
                .unwrap_or(Decimal::ZERO),
        })
    }
}
