pub mod valuation_calculator;
pub mod valuation_model;
pub mod valuation_service;



pub use valuation_calculator::calculate_valuation;
pub use valuation_model::{Holding, PortfolioValuation, ValuationState};
pub use valuation_service::{ValuationService, ValuationServiceTrait};
