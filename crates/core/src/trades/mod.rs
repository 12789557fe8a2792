//! Trades module - domain models, services, and traits.

mod trades_errors;
mod trades_model;
mod trades_service;
mod trades_traits;


#[cfg(test)]
mod trades_service_tests;

pub use trades_errors::TradeError;
pub use trades_model::{Currency, NewTrade, Trade};
pub use trades_service::TradeService;
pub use trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
