use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::constants::{SETTING_KEY_API_KEY, SETTING_KEY_THEME};
use crate::errors::{Error, Result, StoreError};
use crate::favorites::FavoriteRepositoryTrait;
use crate::settings::{Settings, SettingsRepositoryTrait, SettingsUpdate, Theme};
use crate::trades::TradeRepositoryTrait;

// Define the trait for SettingsService
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;

    fn get_theme(&self) -> Result<Theme>;

    async fn set_theme(&self, theme: Theme) -> Result<()>;

    fn get_api_key(&self) -> Result<Option<String>>;

    async fn set_api_key(&self, api_key: &str) -> Result<()>;

    /// Delete all trades and favorites. Settings themselves survive.
    async fn clear_data(&self) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
}

// Implement the trait for SettingsService
#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        Ok(Settings {
            theme: self.get_theme()?,
            api_key: self.get_api_key()?,
        })
    }

    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
        if let Some(theme) = new_settings.theme {
            self.set_theme(theme).await?;
        }
        if let Some(ref api_key) = new_settings.api_key {
            self.set_api_key(api_key).await?;
        }
        Ok(())
    }

    fn get_theme(&self) -> Result<Theme> {
        match self.settings_repository.get_setting(SETTING_KEY_THEME) {
            // A stored value this build doesn't know degrades to the
            // default rather than wedging the UI.
            Ok(value) => Ok(value.parse().unwrap_or_default()),
            Err(Error::Store(StoreError::NotFound(_))) => Ok(Theme::default()),
            Err(e) => Err(e),
        }
    }

    async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.settings_repository
            .update_setting(SETTING_KEY_THEME, theme.as_str())
            .await
    }

    fn get_api_key(&self) -> Result<Option<String>> {
        match self.settings_repository.get_setting(SETTING_KEY_API_KEY) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Store(StoreError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set_api_key(&self, api_key: &str) -> Result<()> {
        self.settings_repository
            .update_setting(SETTING_KEY_API_KEY, api_key)
            .await
    }

    async fn clear_data(&self) -> Result<()> {
        debug!("Clearing all trades and favorites");
        self.trade_repository.save_trades(&[]).await?;
        self.favorite_repository.save_favorites(&[]).await?;
        Ok(())
    }
}

impl SettingsService {
    pub fn new(
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
    ) -> Self {
        SettingsService {
            settings_repository,
            trade_repository,
            favorite_repository,
        }
    }
}
