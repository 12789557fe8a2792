use async_trait::async_trait;

use super::trades_model::{NewTrade, Trade};
use crate::Result;

/// Trait defining the contract for trade repository operations.
///
/// The ledger is an ordered collection: implementations must preserve
/// insertion order across reads and writes.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    fn get_trades(&self) -> Result<Vec<Trade>>;
    fn get_trade(&self, trade_id: &str) -> Result<Trade>;
    async fn add_trade(&self, trade: Trade) -> Result<Trade>;
    async fn delete_trade(&self, trade_id: &str) -> Result<Trade>;
    /// Replace the whole ledger. Used by clear-data.
    async fn save_trades(&self, trades: &[Trade]) -> Result<()>;
}

/// Trait defining the contract for the trade service.
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    fn get_trades(&self) -> Result<Vec<Trade>>;
    fn get_trade(&self, trade_id: &str) -> Result<Trade>;
    async fn create_trade(&self, new_trade: NewTrade) -> Result<Trade>;
    async fn delete_trade(&self, trade_id: &str) -> Result<Trade>;
}
