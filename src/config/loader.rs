//! Reading the workspace settings file.

use std::path::Path;

use super::{
    ConfigError,
    PortalSettings,
};

/// Name of the settings file looked up in the workspace root.
pub const CONFIG_FILE_NAME: &str = ".health-portal.json";

/// Reads `.health-portal.json` from the workspace root.
///
/// # Returns
/// - `Ok(Some(settings))`: the file exists and parsed
/// - `Ok(None)`: there is no settings file
/// - `Err(ConfigError)`: the file could not be read or parsed
///
/// # Errors
/// - File read errors
/// - JSON parse errors
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<PortalSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: PortalSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
