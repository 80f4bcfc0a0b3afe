//! User settings for the quote calculator
//!
//! Manages user preferences: the vendor's WhatsApp number, the default
//! weekend-exclusion flag, and the optional greeting name used in order
//! messages.

use serde::{Deserialize, Serialize};

use super::paths::BakeryPaths;
use crate::error::PadocaError;

/// User settings for the quote calculator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Vendor WhatsApp number in international format, digits only
    #[serde(default = "default_vendor_phone")]
    pub vendor_phone: String,

    /// Whether new quotes exclude weekends unless told otherwise
    #[serde(default)]
    pub exclude_weekends_default: bool,

    /// Name used in the order-message greeting, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting_name: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_vendor_phone() -> String {
    "5511987654321".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            vendor_phone: default_vendor_phone(),
            exclude_weekends_default: false,
            greeting_name: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BakeryPaths) -> Result<Self, PadocaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PadocaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| PadocaError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BakeryPaths) -> Result<(), PadocaError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| PadocaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| PadocaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
