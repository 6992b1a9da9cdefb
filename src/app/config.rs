//! Launcher settings discovery and loading.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, LauncherConfig};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "GOTTCHA_NF_CONFIG";

/// Settings file looked for in the working directory.
pub const CONFIG_FILE_NAME: &str = ".gottcha-nf.toml";

/// Parse and validate settings from TOML content.
pub fn parse_config_content(content: &str) -> Result<LauncherConfig, AppError> {
    let config: LauncherConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load settings from `path`.
pub fn load_config_from(path: &Path) -> Result<LauncherConfig, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read settings {}: {}", path.display(), e))
    })?;
    parse_config_content(&content)
}

/// Settings file to use, if any: `$GOTTCHA_NF_CONFIG`, else `.gottcha-nf.toml` in `cwd`.
pub fn locate_config(cwd: &Path) -> Result<Option<PathBuf>, AppError> {
    if let Some(explicit) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "{} points to a missing file: {}",
                CONFIG_ENV,
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    Ok(local.is_file().then_some(local))
}

/// Load settings for the current directory, falling back to defaults.
pub fn load_config() -> Result<LauncherConfig, AppError> {
    let cwd = env::current_dir()?;
    match locate_config(&cwd)? {
        Some(path) => {
            debug!(path = %path.display(), "Loading launcher settings");
            load_config_from(&path)
        }
        None => Ok(LauncherConfig::default()),
    }
}
