//! Path management for homefin
//!
//! Provides XDG-compliant path resolution for the configuration directory.
//!
//! ## Path Resolution Order
//!
//! 1. `HOMEFIN_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/homefin` or `~/.config/homefin`
//! 3. Windows: `%APPDATA%\homefin`

use std::path::PathBuf;

use crate::error::HomefinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HOMEFIN_DATA_DIR";

/// Manages all paths used by homefin
#[derive(Debug, Clone)]
pub struct HomefinPaths {
    base_dir: PathBuf,
}

impl HomefinPaths {
    /// Create a new HomefinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HomefinError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HomefinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/homefin/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), HomefinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HomefinError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if homefin has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HomefinError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                HomefinError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("homefin"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HomefinError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HomefinError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("homefin"))
}
