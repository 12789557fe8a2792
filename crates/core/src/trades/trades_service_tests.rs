#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::errors::{Error, Result, StoreError};
    use crate::trades::{
        Currency, NewTrade, Trade, TradeError, TradeRepositoryTrait, TradeService,
        TradeServiceTrait,
    };

    // --- Mock TradeRepository ---
    #[derive(Default)]
    struct MockTradeRepository {
        trades: Arc<Mutex<Vec<Trade>>>,
    }

    #[async_trait]
    impl TradeRepositoryTrait for MockTradeRepository {
        fn get_trades(&self) -> Result<Vec<Trade>> {
            Ok(self.trades.lock().unwrap().clone())
        }

        fn get_trade(&self, trade_id: &str) -> Result<Trade> {
            self.trades
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.id == trade_id)
                .cloned()
                .ok_or_else(|| Error::Store(StoreError::NotFound(trade_id.to_string())))
        }

        async fn add_trade(&self, trade: Trade) -> Result<Trade> {
            self.trades.lock().unwrap().push(trade.clone());
            Ok(trade)
        }

        async fn delete_trade(&self, trade_id: &str) -> Result<Trade> {
            let mut trades = self.trades.lock().unwrap();
            let position = trades
                .iter()
                .position(|t| t.id == trade_id)
                .ok_or_else(|| Error::Store(StoreError::NotFound(trade_id.to_string())))?;
            Ok(trades.remove(position))
        }

        async fn save_trades(&self, new_trades: &[Trade]) -> Result<()> {
            *self.trades.lock().unwrap() = new_trades.to_vec();
            Ok(())
        }
    }

    fn new_trade(name: &str, coin_id: &str) -> NewTrade {
        NewTrade {
            cryptocurrency: name.to_string(),
            crypto_id: coin_id.to_string(),
            amount: dec!(2),
            value: dec!(100),
            currency: Currency::Usd,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            exchange: "Coinbase".to_string(),
        }
    }

    #[tokio::test]
    async fn create_trade_mints_an_id_and_persists() {
        let repository = Arc::new(MockTradeRepository::default());
        let service = TradeService::new(repository.clone());

        let created = service
            .create_trade(new_trade("Bitcoin", "bitcoin"))
            .await
            .unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(created.current_value, None);

        let stored = repository.get_trades().unwrap();
        assert_eq!(stored, vec![created]);
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let repository = Arc::new(MockTradeRepository::default());
        let service = TradeService::new(repository.clone());

        let first = service
            .create_trade(new_trade("Bitcoin", "bitcoin"))
            .await
            .unwrap();
        let second = service
            .create_trade(new_trade("Bitcoin", "bitcoin"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(repository.get_trades().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn invalid_trade_never_reaches_the_store() {
        let repository = Arc::new(MockTradeRepository::default());
        let service = TradeService::new(repository.clone());

        let result = service.create_trade(new_trade("Bitcoin", "")).await;

        assert!(matches!(
            result,
            Err(Error::Trade(TradeError::UnresolvedAsset(_)))
        ));
        assert!(repository.get_trades().unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_trade_removes_only_the_target() {
        let repository = Arc::new(MockTradeRepository::default());
        let service = TradeService::new(repository.clone());

        let keep = service
            .create_trade(new_trade("Bitcoin", "bitcoin"))
            .await
            .unwrap();
        let drop = service
            .create_trade(new_trade("Ethereum", "ethereum"))
            .await
            .unwrap();

        let removed = service.delete_trade(&drop.id).await.unwrap();
        assert_eq!(removed.id, drop.id);
        assert_eq!(repository.get_trades().unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn deleting_an_unknown_trade_is_not_found() {
        let service = TradeService::new(Arc::new(MockTradeRepository::default()));
        assert!(matches!(
            service.delete_trade("missing").await,
            Err(Error::Store(StoreError::NotFound(_)))
        ));
    }
}
