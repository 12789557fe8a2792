//! Trade domain models.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trades::TradeError;
use crate::Result;

/// Fiat currency a trade was settled in.
///
/// The recorded currency is descriptive only: current valuation is
/// always quoted in USD (see [`crate::constants::VALUATION_CURRENCY`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Eur => write!(f, "EUR"),
        }
    }
}

/// Domain model representing one recorded trade.
///
/// Persisted as an element of the `trades` blob. `current_value` is
/// derived: it is recomputed on every valuation pass and carries no
/// meaning between refreshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Opaque unique identifier, minted at creation, immutable.
    pub id: String,

    /// Display name of the asset (e.g. "Bitcoin").
    pub cryptocurrency: String,

    /// Canonical coin id used for price lookups (e.g. "bitcoin").
    /// Resolved from a search candidate at creation time, never free-typed.
    pub crypto_id: String,

    /// Quantity held.
    pub amount: Decimal,

    /// Transaction value recorded at trade time (historical cost).
    pub value: Decimal,

    /// Fiat currency the historical cost is denominated in.
    pub currency: Currency,

    /// Calendar date of the transaction.
    pub date: NaiveDate,

    /// Free-text label of where the trade occurred.
    pub exchange: String,

    /// Current value of the position, populated by the valuation engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<Decimal>,
}

/// Payload for recording a new trade.
///
/// `crypto_id` must come from a search candidate the user selected; a
/// payload without one fails validation and never reaches the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    pub cryptocurrency: String,
    pub crypto_id: String,
    pub amount: Decimal,
    pub value: Decimal,
    pub currency: Currency,
    pub date: NaiveDate,
    pub exchange: String,
}

impl NewTrade {
    pub fn validate(&self) -> Result<()> {
        if self.crypto_id.trim().is_empty() {
            return Err(TradeError::UnresolvedAsset(self.cryptocurrency.clone()).into());
        }
        if self.cryptocurrency.trim().is_empty() {
            return Err(TradeError::InvalidData("cryptocurrency name is empty".to_string()).into());
        }
        if self.exchange.trim().is_empty() {
            return Err(TradeError::InvalidData("exchange is empty".to_string()).into());
        }
        if self.amount < Decimal::ZERO {
            return Err(TradeError::InvalidData(format!(
                "amount must be non-negative, got {}",
                self.amount
            ))
            .into());
        }
        if self.value < Decimal::ZERO {
            return Err(TradeError::InvalidData(format!(
                "value must be non-negative, got {}",
                self.value
            ))
            .into());
        }
        Ok(())
    }

    /// Build the persisted trade with a freshly minted id.
    pub(crate) fn into_trade(self, id: String) -> Trade {
        Trade {
            id,
            cryptocurrency: self.cryptocurrency,
            crypto_id: self.crypto_id,
            amount: self.amount,
            value: self.value,
            currency: self.currency,
            date: self.date,
            exchange: self.exchange,
            current_value: None,
        }
    }
}
