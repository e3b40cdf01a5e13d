//! Portal settings: the workspace settings file, its validation and the
//! locale file matcher built from it.

/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Locale file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use manager::ConfigManager;
pub use matcher::{
    FileMatcher,
    MatcherError,
};
pub use types::{
    ConfigError,
    PortalSettings,
    TranslationFilesConfig,
    ValidationError,
};
