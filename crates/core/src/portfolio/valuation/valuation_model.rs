//! Portfolio valuation domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trades::Trade;

/// Aggregated position for one asset display name.
///
/// Purely derived: recomputed on every valuation pass and never
/// persisted independently of its source trades.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Asset display name the group is keyed by.
    pub cryptocurrency: String,

    /// Sum of the member trades' amounts.
    pub amount: Decimal,

    /// Sum of the member trades' current values, in USD.
    pub value: Decimal,
}

/// Result of one valuation pass over the trade ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// The input trades with `current_value` populated, in input order.
    pub trades: Vec<Trade>,

    /// Aggregated holdings in first-occurrence order of their display
    /// name.
    pub holdings: Vec<Holding>,

    /// Sum of all current values, in USD.
    pub total_value: Decimal,
}

impl PortfolioValuation {
    /// The valuation of an empty ledger.
    pub fn empty() -> Self {
        Self {
            trades: Vec::new(),
            holdings: Vec::new(),
            total_value: Decimal::ZERO,
        }
    }

    /// Look up the aggregated holding for a display name.
    pub fn holding(&self, cryptocurrency: &str) -> Option<&Holding> {
        self.holdings
            .iter()
            .find(|h| h.cryptocurrency == cryptocurrency)
    }
}

/// A committed valuation together with the moment it was refreshed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValuationState {
    pub valuation: PortfolioValuation,
    pub refreshed_at: DateTime<Utc>,
}
