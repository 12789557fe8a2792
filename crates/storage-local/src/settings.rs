//! Settings repository backed by the local blob store.
//!
//! Settings are raw string values (not JSON blobs) under their own
//! keys, matching the layout the store has always used.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::StorageError;
use crate::store::LocalStore;
use coinstack_core::errors::Result;
use coinstack_core::settings::SettingsRepositoryTrait;

pub struct SettingsRepository {
    store: Arc<LocalStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        SettingsRepository { store }
    }
}

// Implement the trait for SettingsRepository
#[async_trait]
impl SettingsRepositoryTrait for SettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.store
            .get_item(setting_key)
            .ok_or_else(|| StorageError::KeyNotFound(setting_key.to_string()).into())
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.store
            .set_item(setting_key, setting_value)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
