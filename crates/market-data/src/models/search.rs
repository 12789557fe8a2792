//! Search result models for coin lookup.

use serde::{Deserialize, Serialize};

/// One candidate coin returned by a free-text search.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoinSearchResult {
    /// Canonical coin id used for all price lookups (e.g. "bitcoin")
    pub id: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,

    /// Ticker symbol (e.g. "BTC")
    pub symbol: String,
}

impl CoinSearchResult {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
        }
    }
}

/// Envelope returned by the `/search` endpoint.
///
/// The endpoint also lists exchanges, categories and NFTs; only the
/// `coins` array is consumed.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<CoinSearchResult>,
}
