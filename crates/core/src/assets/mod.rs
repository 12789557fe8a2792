//! Asset search resolution - models, service, and trait.

mod assets_model;
mod assets_service;
mod assets_traits;


pub use assets_model::AssetCandidate;
pub use assets_service::AssetSearchService;
pub use assets_traits::AssetSearchServiceTrait;
