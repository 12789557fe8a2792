//! Spot price models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spot price of one coin in the reference currency.
///
/// Mirrors the `{"usd": 12345.67}` objects of the `/simple/price`
/// endpoint. Valuation runs against USD only; other quote currencies
/// are never requested.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricePoint {
    pub usd: Decimal,
}

impl PricePoint {
    pub fn new(usd: Decimal) -> Self {
        Self { usd }
    }
}

/// One batch of spot prices keyed by canonical coin id.
///
/// A snapshot is taken once per refresh and then treated as immutable
/// input to the valuation calculator. A coin id absent from the
/// snapshot is not an error at this layer; the calculator decides what
/// a missing price means.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSnapshot(HashMap<String, PricePoint>);

impl PriceSnapshot {
    pub fn new(prices: HashMap<String, PricePoint>) -> Self {
        Self(prices)
    }

    /// USD spot price for the given coin id, if present.
    pub fn usd_price(&self, coin_id: &str) -> Option<Decimal> {
        self.0.get(coin_id).map(|p| p.usd)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, PricePoint)> for PriceSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, PricePoint)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
