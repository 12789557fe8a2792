//! Asset search domain models.

use serde::{Deserialize, Serialize};

use coinstack_market_data::CoinSearchResult;

/// A resolvable asset candidate returned by a search.
///
/// Candidates are the only source of canonical coin ids: the trade form
/// and the favorites list both materialize their records from a
/// selected candidate, never from free-typed ids.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetCandidate {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

impl From<CoinSearchResult> for AssetCandidate {
    fn from(result: CoinSearchResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            symbol: result.symbol,
        }
    }
}
