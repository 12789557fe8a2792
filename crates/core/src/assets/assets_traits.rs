use async_trait::async_trait;

use super::assets_model::AssetCandidate;
use crate::Result;

/// Trait defining the contract for asset search resolution.
#[async_trait]
pub trait AssetSearchServiceTrait: Send + Sync {
    /// Resolve a free-text query to a small ranked list of candidates.
    async fn search(&self, query: &str) -> Result<Vec<AssetCandidate>>;
}
