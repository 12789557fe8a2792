use thiserror::Error;

/// Errors specific to trade ledger operations.
#[derive(Error, Debug)]
pub enum TradeError {
    /// The trade's cryptocurrency name was never resolved to a canonical
    /// coin id. Rejected before the store is touched.
    #[error("'{0}' is not a resolved cryptocurrency; select it from the search results")]
    UnresolvedAsset(String),

    #[error("Invalid trade data: {0}")]
    InvalidData(String),
}
