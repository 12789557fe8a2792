//! CoinGecko market data provider implementation.
//!
//! This module provides coin data from the public CoinGecko API:
//! - Coin search via the /search endpoint
//! - Batch USD spot prices via the /simple/price endpoint
//! - Per-coin detail via the /coins/{id} endpoint
//!
//! The free tier accepts keyless requests; a demo API key, when
//! configured, is attached as the `x-cg-demo-api-key` header.
//! API documentation: https://docs.coingecko.com/reference/introduction

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{
    CoinDetailResponse, CoinSearchResult, CoinSnapshot, PricePoint, PriceSnapshot, SearchResponse,
};
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";
const PROVIDER_ID: &str = "COINGECKO";

/// Header carrying the optional demo API key.
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Outcome of a raw fetch, before endpoint-specific interpretation.
///
/// Kept private so each endpoint method can decide what a 404 means
/// (a missing coin for /coins/{id}, a plain provider error elsewhere).
enum FetchError {
    Timeout,
    RateLimited,
    Status(reqwest::StatusCode, String),
    Transport(String),
}

impl FetchError {
    fn into_market_error(self) -> MarketDataError {
        match self {
            FetchError::Timeout => MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            },
            FetchError::RateLimited => MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            },
            FetchError::Status(status, body) => MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            },
            FetchError::Transport(message) => MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            },
        }
    }
}

/// CoinGecko market data provider.
///
/// Every call is one request/response fetch; failures are terminal for
/// the triggering action (no retry, no backoff).
pub struct CoinGeckoProvider {
    client: Client,
    api_key: Option<String>,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new(None)
    }
}

impl CoinGeckoProvider {
    /// Create a new provider. The API key is optional; keyless requests
    /// use the public free tier.
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    /// Make a GET request and return the raw response body.
    async fn fetch(&self, path: &str, params: &[(&str, &str)]) -> Result<String, FetchError> {
        let url = format!("{}{}", BASE_URL, path);

        let mut request = self.client.get(&url);

        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        for (key, value) in params {
            request = request.query(&[(key, value)]);
        }

        debug!("CoinGecko request: {} with {} params", path, params.len());

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status(status, body));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("Failed to read response: {}", e)))
    }

    fn decode<T: DeserializeOwned>(body: &str) -> Result<T, MarketDataError> {
        serde_json::from_str(body).map_err(|e| MarketDataError::Deserialization {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })
    }
}

/// Decode a `/simple/price` body into a snapshot.
///
/// An empty mapping means the fetch failed as a whole (unknown ids,
/// malformed request); per spec it is reported as an error rather than
/// an all-zero valuation.
fn parse_price_snapshot(body: &str) -> Result<PriceSnapshot, MarketDataError> {
    let prices: HashMap<String, PricePoint> = CoinGeckoProvider::decode(body)?;
    if prices.is_empty() {
        return Err(MarketDataError::EmptyPriceData);
    }
    Ok(PriceSnapshot::new(prices))
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSearchResult>, MarketDataError> {
        let body = self
            .fetch("/search", &[("query", query)])
            .await
            .map_err(FetchError::into_market_error)?;

        let response: SearchResponse = Self::decode(&body)?;
        debug!(
            "CoinGecko search for '{}' returned {} coins",
            query,
            response.coins.len()
        );
        Ok(response.coins)
    }

    async fn get_latest_prices(
        &self,
        coin_ids: &[String],
    ) -> Result<PriceSnapshot, MarketDataError> {
        let ids = coin_ids.join(",");
        let body = self
            .fetch("/simple/price", &[("ids", &ids), ("vs_currencies", "usd")])
            .await
            .map_err(FetchError::into_market_error)?;

        parse_price_snapshot(&body)
    }

    async fn get_coin_snapshot(&self, coin_id: &str) -> Result<CoinSnapshot, MarketDataError> {
        let path = format!("/coins/{}", urlencoding::encode(coin_id));
        let body = self.fetch(&path, &[]).await.map_err(|e| match e {
            FetchError::Status(reqwest::StatusCode::NOT_FOUND, _) => {
                MarketDataError::CoinNotFound(coin_id.to_string())
            }
            other => other.into_market_error(),
        })?;

        let detail: CoinDetailResponse = Self::decode(&body)?;
        detail.into_snapshot(PROVIDER_ID)
    }
}
