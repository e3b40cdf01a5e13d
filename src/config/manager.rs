//! Holds the active portal settings.

use std::path::{
    Path,
    PathBuf,
};

use chrono::NaiveDate;

use super::{
    ConfigError,
    PortalSettings,
    loader,
};

/// Owns the settings of one workspace.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings in effect.
    current_settings: PortalSettings,

    /// Workspace the settings were loaded from.
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// A manager holding the default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: PortalSettings::default(), workspace_root: None }
    }

    /// Loads and validates the workspace settings file, falling back to
    /// defaults when there is none.
    ///
    /// # Errors
    /// - File read errors
    /// - JSON parse errors
    /// - Validation errors
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(PortalSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            PortalSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the settings after validating them.
    pub fn update_settings(&mut self, new_settings: PortalSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// The settings in effect.
    #[must_use]
    pub const fn get_settings(&self) -> &PortalSettings {
        &self.current_settings
    }

    /// The workspace root, once settings were loaded for one.
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// `dataDir` resolved against the workspace root, if configured.
    #[must_use]
    pub fn data_dir(&self) -> Option<PathBuf> {
        let dir = Path::new(self.current_settings.data_dir.as_deref()?);
        match &self.workspace_root {
            Some(root) if dir.is_relative() => Some(root.join(dir)),
            _ => Some(dir.to_path_buf()),
        }
    }

    /// The configured `referenceDate`, or the host's local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.current_settings
            .reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
