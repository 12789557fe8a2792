//! The valuation engine: a pure transform from trades plus a price
//! snapshot to enriched trades and aggregates.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::portfolio::valuation::valuation_model::{Holding, PortfolioValuation};
use crate::trades::Trade;

use coinstack_market_data::PriceSnapshot;

/// Computes current values and aggregated holdings for a trade ledger
/// against a price snapshot.
///
/// For each trade, `current_value = amount * price`, where the price is
/// looked up by canonical coin id and quoted in USD. A coin id absent
/// from the snapshot values the trade at exactly zero - the pass never
/// fails on a missing price; the trade still contributes its amount to
/// its holding.
///
/// Holdings group by the `cryptocurrency` display name, not the coin
/// id: two trades sharing a display name aggregate together even if
/// their underlying assets differ. Groups appear in first-occurrence
/// order; enriched trades keep input order.
///
/// Pure function: no I/O, no clock, identical output for identical
/// inputs.
pub fn calculate_valuation(trades: &[Trade], prices: &PriceSnapshot) -> PortfolioValuation {
    let mut enriched = Vec::with_capacity(trades.len());
    let mut holdings: Vec<Holding> = Vec::new();
    let mut holding_index: HashMap<String, usize> = HashMap::new();
    let mut total_value = Decimal::ZERO;

    for trade in trades {
        let current_value = match prices.usd_price(&trade.crypto_id) {
            Some(price) => trade.amount * price,
            None => {
                debug!(
                    "No price for '{}', valuing trade {} at zero",
                    trade.crypto_id, trade.id
                );
                Decimal::ZERO
            }
        };
        total_value += current_value;

        match holding_index.get(&trade.cryptocurrency) {
            Some(&index) => {
                let holding = &mut holdings[index];
                holding.amount += trade.amount;
                holding.value += current_value;
            }
            None => {
                holding_index.insert(trade.cryptocurrency.clone(), holdings.len());
                holdings.push(Holding {
                    cryptocurrency: trade.cryptocurrency.clone(),
                    amount: trade.amount,
                    value: current_value,
                });
            }
        }

        let mut trade = trade.clone();
        trade.current_value = Some(current_value);
        enriched.push(trade);
    }

    PortfolioValuation {
        trades: enriched,
        holdings,
        total_value,
    }
}
