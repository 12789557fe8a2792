//! Data models for market data operations.

mod coin;
mod price;
mod search;

pub use coin::{CoinDetailResponse, CoinSnapshot, MarketData};
pub use price::{PricePoint, PriceSnapshot};
pub use search::{CoinSearchResult, SearchResponse};
