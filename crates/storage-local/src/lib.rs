//! Local blob storage implementation for Coinstack.
//!
//! This crate provides all persistence for the application: a single
//! JSON key-value document on disk plus repository implementations of
//! the traits defined in `coinstack-core`.
//!
//! # Architecture
//!
//! This crate is the only place in the application that touches the
//! filesystem. All other crates are storage-agnostic and work with
//! traits.
//!
//! ```text
//!            core (domain)
//!                 │
//!                 ▼
//!        storage-local (this crate)
//!                 │
//!                 ▼
//!        store.json on disk
//! ```
//!
//! The store maps string keys to opaque string values: `trades` and
//! `favorites` hold JSON arrays, the settings keys hold raw strings.
//! Every mutation is written through to disk.

pub mod errors;
pub mod favorites;
pub mod settings;
pub mod store;
pub mod trades;

// Re-export store utilities
pub use store::{LocalStore, FAVORITES_STORE_KEY, TRADES_STORE_KEY};

// Re-export repositories
pub use favorites::FavoriteRepository;
pub use settings::SettingsRepository;
pub use trades::TradeRepository;

// Re-export storage errors
pub use errors::StorageError;

// Re-export from coinstack-core for convenience
pub use coinstack_core::errors::{Error, Result, StoreError};
