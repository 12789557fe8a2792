//! Repository trait for settings.

use async_trait::async_trait;

use crate::Result;

/// Repository trait for managing application settings.
///
/// Settings are raw string values under stable keys; typed accessors
/// live in the service layer.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
