//! Favorites domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetCandidate;

use coinstack_market_data::CoinSnapshot;

/// A tracked coin, independent of the trade ledger.
///
/// `price` and `price_change_24h` are the snapshot captured when the
/// favorite was added (or last re-added); they are not refreshed in the
/// background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Canonical coin id (e.g. "bitcoin").
    pub id: String,

    /// Display name (e.g. "Bitcoin").
    pub name: String,

    /// Ticker symbol (e.g. "BTC").
    pub symbol: String,

    /// USD spot price at add-time.
    pub price: Decimal,

    /// 24h percentage change at add-time.
    pub price_change_24h: Decimal,
}

impl Favorite {
    /// Materialize a favorite from a selected candidate and its
    /// add-time price snapshot.
    pub fn from_snapshot(candidate: &AssetCandidate, snapshot: CoinSnapshot) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            symbol: candidate.symbol.clone(),
            price: snapshot.price,
            price_change_24h: snapshot.price_change_24h,
        }
    }
}
