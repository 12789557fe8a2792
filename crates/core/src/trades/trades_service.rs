use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

use crate::trades::trades_model::{NewTrade, Trade};
use crate::trades::{TradeRepositoryTrait, TradeServiceTrait};
use crate::Result;

/// Service for managing the trade ledger.
pub struct TradeService {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
}

impl TradeService {
    /// Creates a new TradeService instance with an injected repository.
    pub fn new(trade_repository: Arc<dyn TradeRepositoryTrait>) -> Self {
        Self { trade_repository }
    }
}

#[async_trait]
impl TradeServiceTrait for TradeService {
    fn get_trades(&self) -> Result<Vec<Trade>> {
        self.trade_repository.get_trades()
    }

    fn get_trade(&self, trade_id: &str) -> Result<Trade> {
        self.trade_repository.get_trade(trade_id)
    }

    async fn create_trade(&self, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;

        let trade = new_trade.into_trade(Uuid::new_v4().to_string());
        debug!(
            "Recording trade {} ({} {})",
            trade.id, trade.amount, trade.cryptocurrency
        );
        self.trade_repository.add_trade(trade).await
    }

    async fn delete_trade(&self, trade_id: &str) -> Result<Trade> {
        self.trade_repository.delete_trade(trade_id).await
    }
}
