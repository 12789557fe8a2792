//! Trade repository backed by the local blob store.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::store::{LocalStore, TRADES_STORE_KEY};
use coinstack_core::errors::Result;
use coinstack_core::trades::{Trade, TradeRepositoryTrait};

pub struct TradeRepository {
    store: Arc<LocalStore>,
}

impl TradeRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        TradeRepository { store }
    }

    fn load(&self) -> Result<Vec<Trade>> {
        Ok(self
            .store
            .get_json::<Vec<Trade>>(TRADES_STORE_KEY)
            .map_err(StorageError::from)?
            .unwrap_or_default())
    }

    fn save(&self, trades: &[Trade]) -> Result<()> {
        self.store
            .set_json(TRADES_STORE_KEY, &trades)
            .map_err(StorageError::from)?;
        Ok(())
    }
}

// Implement the trait for TradeRepository
#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    fn get_trades(&self) -> Result<Vec<Trade>> {
        self.load()
    }

    fn get_trade(&self, trade_id: &str) -> Result<Trade> {
        self.load()?
            .into_iter()
            .find(|t| t.id == trade_id)
            .ok_or_else(|| StorageError::KeyNotFound(format!("trade {}", trade_id)).into())
    }

    async fn add_trade(&self, trade: Trade) -> Result<Trade> {
        let mut trades = self.load()?;
        trades.push(trade.clone());
        self.save(&trades)?;
        Ok(trade)
    }

    async fn delete_trade(&self, trade_id: &str) -> Result<Trade> {
        let mut trades = self.load()?;
        let position = trades
            .iter()
            .position(|t| t.id == trade_id)
            .ok_or_else(|| StorageError::KeyNotFound(format!("trade {}", trade_id)))?;
        let removed = trades.remove(position);
        self.save(&trades)?;
        Ok(removed)
    }

    async fn save_trades(&self, trades: &[Trade]) -> Result<()> {
        self.save(trades)
    }
}
