//! Coinstack Market Data Crate
//!
//! This crate provides coin price and search data for the Coinstack
//! application, fetched from a public REST collaborator (CoinGecko).
//!
//! # Overview
//!
//! The market data crate supports:
//! - Free-text coin search (`/search`)
//! - Batch spot prices in USD (`/simple/price`)
//! - Per-coin snapshots with 24h change (`/coins/{id}`)
//!
//! Requests are plain request/response fetches: no retry, no backoff, no
//! caching. A failed call surfaces as a [`MarketDataError`] and leaves the
//! caller's state untouched.
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - Trait implemented by data sources
//! - [`CoinGeckoProvider`] - The CoinGecko implementation
//! - [`PriceSnapshot`] - Batch of USD spot prices keyed by coin id
//! - [`CoinSnapshot`] - Single-coin price plus 24h change
//! - [`CoinSearchResult`] - One candidate from a search query

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{CoinSearchResult, CoinSnapshot, PricePoint, PriceSnapshot};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::MarketDataProvider;
