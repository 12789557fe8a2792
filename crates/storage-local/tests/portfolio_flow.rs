//! End-to-end flow over the real blob store: record trades, value the
//! portfolio, manage favorites, clear data.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::tempdir;

use coinstack_core::assets::{AssetCandidate, AssetSearchService, AssetSearchServiceTrait};
use coinstack_core::favorites::{FavoriteServiceTrait, FavoritesService};
use coinstack_core::portfolio::valuation::{ValuationService, ValuationServiceTrait};
use coinstack_core::settings::{SettingsService, SettingsServiceTrait, Theme};
use coinstack_core::trades::{Currency, NewTrade, TradeService, TradeServiceTrait};
use coinstack_storage_local::{
    FavoriteRepository, LocalStore, SettingsRepository, TradeRepository,
};

use coinstack_market_data::{
    CoinSearchResult, CoinSnapshot, MarketDataError, MarketDataProvider, PricePoint, PriceSnapshot,
};

/// Scripted collaborator standing in for the real price API.
#[derive(Default)]
struct ScriptedProvider {
    search_results: Mutex<Vec<CoinSearchResult>>,
    prices: Mutex<VecDeque<Result<PriceSnapshot, MarketDataError>>>,
    snapshots: Mutex<VecDeque<Result<CoinSnapshot, MarketDataError>>>,
}

#[async_trait]
impl MarketDataProvider for ScriptedProvider {
    fn id(&self) -> &'static str {
        "SCRIPTED"
    }

    async fn search_coins(&self, _query: &str) -> Result<Vec<CoinSearchResult>, MarketDataError> {
        Ok(self.search_results.lock().unwrap().clone())
    }

    async fn get_latest_prices(
        &self,
        _coin_ids: &[String],
    ) -> Result<PriceSnapshot, MarketDataError> {
        self.prices
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted price fetch")
    }

    async fn get_coin_snapshot(&self, _coin_id: &str) -> Result<CoinSnapshot, MarketDataError> {
        self.snapshots
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted snapshot fetch")
    }
}

struct App {
    _dir: tempfile::TempDir,
    provider: Arc<ScriptedProvider>,
    trades: TradeService,
    valuation: ValuationService,
    favorites: FavoritesService,
    settings: SettingsService,
}

fn app() -> App {
    let dir = tempdir().unwrap();
    let store = Arc::new(LocalStore::open(dir.path().join("store.json")).unwrap());
    let provider = Arc::new(ScriptedProvider::default());

    let trade_repository = Arc::new(TradeRepository::new(store.clone()));
    let favorite_repository = Arc::new(FavoriteRepository::new(store.clone()));
    let settings_repository = Arc::new(SettingsRepository::new(store.clone()));
    let search_service: Arc<dyn AssetSearchServiceTrait> =
        Arc::new(AssetSearchService::new(provider.clone()));

    App {
        _dir: dir,
        provider: provider.clone(),
        trades: TradeService::new(trade_repository.clone()),
        valuation: ValuationService::new(trade_repository.clone(), provider.clone()),
        favorites: FavoritesService::new(favorite_repository.clone(), search_service, provider),
        settings: SettingsService::new(settings_repository, trade_repository, favorite_repository),
    }
}

fn new_trade(name: &str, coin_id: &str, amount: rust_decimal::Decimal) -> NewTrade {
    NewTrade {
        cryptocurrency: name.to_string(),
        crypto_id: coin_id.to_string(),
        amount,
        value: dec!(100),
        currency: Currency::Usd,
        date: NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        exchange: "Kraken".to_string(),
    }
}

#[tokio::test]
async fn recorded_trades_value_against_a_fresh_snapshot() {
    let app = app();
    app.trades
        .create_trade(new_trade("Bitcoin", "bitcoin", dec!(2)))
        .await
        .unwrap();
    app.trades
        .create_trade(new_trade("Bitcoin", "bitcoin", dec!(3)))
        .await
        .unwrap();
    app.trades
        .create_trade(new_trade("Dogecoin", "dogecoin", dec!(10)))
        .await
        .unwrap();

    let snapshot: PriceSnapshot = [("bitcoin".to_string(), PricePoint::new(dec!(100)))]
        .into_iter()
        .collect();
    app.provider.prices.lock().unwrap().push_back(Ok(snapshot));

    let valuation = app.valuation.refresh().await.unwrap();

    assert_eq!(valuation.total_value, dec!(500));
    let bitcoin = valuation.holding("Bitcoin").unwrap();
    assert_eq!(bitcoin.amount, dec!(5));
    assert_eq!(bitcoin.value, dec!(500));
    // Dogecoin had no price: zero value, amount still aggregated.
    let dogecoin = valuation.holding("Dogecoin").unwrap();
    assert_eq!(dogecoin.amount, dec!(10));
    assert_eq!(dogecoin.value, dec!(0));
}

#[tokio::test]
async fn a_failed_refresh_keeps_the_previous_valuation_visible() {
    let app = app();
    app.trades
        .create_trade(new_trade("Bitcoin", "bitcoin", dec!(1)))
        .await
        .unwrap();

    let snapshot: PriceSnapshot = [("bitcoin".to_string(), PricePoint::new(dec!(250)))]
        .into_iter()
        .collect();
    {
        let mut prices = app.provider.prices.lock().unwrap();
        prices.push_back(Ok(snapshot));
        prices.push_back(Err(MarketDataError::EmptyPriceData));
    }

    app.valuation.refresh().await.unwrap();
    assert!(app.valuation.refresh().await.is_err());

    let state = app.valuation.current().unwrap();
    assert_eq!(state.valuation.total_value, dec!(250));
    assert_eq!(app.trades.get_trades().unwrap().len(), 1);
}

#[tokio::test]
async fn favorites_search_select_and_remove() {
    let app = app();
    *app.provider.search_results.lock().unwrap() = vec![
        CoinSearchResult::new("bitcoin", "Bitcoin", "BTC"),
        CoinSearchResult::new("bitcoin-cash", "Bitcoin Cash", "BCH"),
    ];
    app.provider
        .snapshots
        .lock()
        .unwrap()
        .push_back(Ok(CoinSnapshot {
            price: dec!(64250.12),
            price_change_24h: dec!(-2.35),
        }));

    let candidates = app.favorites.search_coins("bitc").await.unwrap();
    assert_eq!(candidates.len(), 2);

    let favorite = app.favorites.add_favorite(&candidates[0]).await.unwrap();
    assert_eq!(favorite.name, "Bitcoin");
    assert_eq!(favorite.price, dec!(64250.12));

    app.favorites.remove_favorite("bitcoin").await.unwrap();
    assert!(app.favorites.get_favorites().unwrap().is_empty());
}

#[tokio::test]
async fn clear_data_empties_the_store_but_keeps_settings() {
    let app = app();
    app.trades
        .create_trade(new_trade("Bitcoin", "bitcoin", dec!(1)))
        .await
        .unwrap();
    app.provider
        .snapshots
        .lock()
        .unwrap()
        .push_back(Ok(CoinSnapshot {
            price: dec!(1),
            price_change_24h: dec!(0),
        }));
    app.favorites
        .add_favorite(&AssetCandidate {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
        })
        .await
        .unwrap();
    app.settings.set_theme(Theme::Dark).await.unwrap();
    app.settings.set_api_key("CG-demo-123").await.unwrap();

    app.settings.clear_data().await.unwrap();

    assert!(app.trades.get_trades().unwrap().is_empty());
    assert!(app.favorites.get_favorites().unwrap().is_empty());
    let settings = app.settings.get_settings().unwrap();
    assert_eq!(settings.theme, Theme::Dark);
    assert_eq!(settings.api_key, Some("CG-demo-123".to_string()));
}
