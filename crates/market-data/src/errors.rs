//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested coin id was not found by the provider.
    /// This is a terminal error - retrying won't help.
    #[error("Coin not found: {0}")]
    CoinNotFound(String),

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The price endpoint answered with an empty mapping.
    /// Treated as a failed fetch, distinct from a single missing id
    /// inside a non-empty snapshot.
    #[error("No price data returned. Please check the cryptocurrency ids.")]
    EmptyPriceData,

    /// The provider's response body could not be decoded.
    #[error("Failed to decode response from {provider}: {message}")]
    Deserialization {
        /// The provider whose payload failed to decode
        provider: String,
        /// Decode failure detail
        message: String,
    },

    /// A provider-specific error occurred (non-success HTTP status,
    /// transport failure, malformed payload).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },
}
