pub mod valuation;

pub use valuation::*;
