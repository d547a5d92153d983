//! Effective settings for a `scan` run.

use std::path::Path;

use super::{
    ConfigError,
    MergeSettings,
    SettingsOverrides,
    loader,
};

/// Validated settings: config file (or defaults) with command line flags on top.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 検証済みの設定
    settings: MergeSettings,
}

impl ConfigManager {
    /// Reads `.strings-merge.json` from `root`, applies `overrides` and
    /// validates the result.
    ///
    /// A missing config file means defaults. Validation runs after the
    /// overrides, so a flag can fix an invalid file value and vice versa.
    ///
    /// # Errors
    /// - `ConfigError::Read` / `ConfigError::Parse` for an unreadable or malformed file
    /// - `ConfigError::ValidationErrors` listing every invalid field
    pub fn load(root: &Path, overrides: &SettingsOverrides) -> Result<Self, ConfigError> {
        let mut settings = loader::read_config_file(root)?.unwrap_or_default();
        settings.apply_overrides(overrides);
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!("Effective settings: {:?}", settings);
        Ok(Self { settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &MergeSettings {
        &self.settings
    }
}
