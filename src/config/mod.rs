//! Settings of the batch driver: `.strings-merge.json` loading and validation.
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Language directory / strings file name matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    MatcherError,
    NameMatcher,
};
pub use types::{
    ConfigError,
    MergeSettings,
    SettingsOverrides,
    ValidationError,
};
