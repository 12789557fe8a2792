//! Valuation refresh orchestration.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::portfolio::valuation::valuation_calculator::calculate_valuation;
use crate::portfolio::valuation::valuation_model::{PortfolioValuation, ValuationState};
use crate::trades::{Trade, TradeRepositoryTrait};
use crate::Result;

use coinstack_market_data::MarketDataProvider;

#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// The last committed valuation, if any refresh has succeeded yet.
    fn current(&self) -> Option<ValuationState>;

    /// Fetch a fresh price snapshot and recompute the portfolio
    /// valuation.
    ///
    /// A collaborator failure is returned as an error and leaves the
    /// committed state untouched. Overlapping refreshes are resolved by
    /// a monotonically increasing request token: a result only commits
    /// while no refresh issued after it has committed, so a stale
    /// response can never overwrite a newer one.
    async fn refresh(&self) -> Result<PortfolioValuation>;
}

struct Committed {
    token: u64,
    state: Option<ValuationState>,
}

/// Computes live portfolio valuations from the trade ledger and the
/// market data collaborator.
pub struct ValuationService {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    provider: Arc<dyn MarketDataProvider>,
    refresh_seq: AtomicU64,
    committed: Mutex<Committed>,
}

impl ValuationService {
    /// Creates a new ValuationService instance with injected
    /// dependencies.
    pub fn new(
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            trade_repository,
            provider,
            refresh_seq: AtomicU64::new(0),
            committed: Mutex::new(Committed {
                token: 0,
                state: None,
            }),
        }
    }

    fn committed(&self) -> MutexGuard<'_, Committed> {
        self.committed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Commit a refresh result unless a newer refresh already committed.
    pub(crate) fn commit(&self, token: u64, valuation: &PortfolioValuation) {
        let mut committed = self.committed();
        if token <= committed.token {
            debug!(
                "Discarding valuation refresh {} superseded by {}",
                token, committed.token
            );
            return;
        }
        committed.token = token;
        committed.state = Some(ValuationState {
            valuation: valuation.clone(),
            refreshed_at: Utc::now(),
        });
    }
}

/// Unique coin ids in first-occurrence order.
fn unique_coin_ids(trades: &[Trade]) -> Vec<String> {
    let mut seen = HashSet::new();
    trades
        .iter()
        .filter(|t| seen.insert(t.crypto_id.clone()))
        .map(|t| t.crypto_id.clone())
        .collect()
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    fn current(&self) -> Option<ValuationState> {
        self.committed().state.clone()
    }

    async fn refresh(&self) -> Result<PortfolioValuation> {
        let token = self.refresh_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let trades = self.trade_repository.get_trades()?;
        let valuation = if trades.is_empty() {
            // An empty ledger needs no snapshot.
            PortfolioValuation::empty()
        } else {
            let coin_ids = unique_coin_ids(&trades);
            debug!(
                "Refresh {}: fetching prices for {} coins",
                token,
                coin_ids.len()
            );
            let prices = self.provider.get_latest_prices(&coin_ids).await?;
            calculate_valuation(&trades, &prices)
        };

        self.commit(token, &valuation);
        Ok(valuation)
    }
}
