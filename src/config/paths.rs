//! Path management for the quote calculator
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `PADOCA_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/padoca-cli` or `~/.config/padoca-cli`
//! 3. Windows: `%APPDATA%\padoca-cli`

use std::path::PathBuf;

use crate::error::PadocaError;

/// Manages all paths used by the quote calculator
#[derive(Debug, Clone)]
pub struct BakeryPaths {
    /// Base directory for all configuration
    base_dir: PathBuf,
}

impl BakeryPaths {
    /// Create a new BakeryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PadocaError> {
        let base_dir = if let Ok(custom) = std::env::var("PADOCA_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BakeryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/padoca-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PadocaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PadocaError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }

    /// Check if the calculator has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default config directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PadocaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("padoca-cli"))
}

/// Resolve the default config directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PadocaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PadocaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("padoca-cli"))
}
