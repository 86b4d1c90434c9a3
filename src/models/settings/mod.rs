// Settings module
// Application configuration stored as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::models::display::DisplayLanguage;

pub const DEFAULT_SPOUSE_PLACEHOLDER: &str = "Spouse";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file holding the records. `None` uses the platform data dir.
    pub database_path: Option<PathBuf>,
    pub display_language: DisplayLanguage,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Label for a spouse birthday when no spouse name was recorded.
    pub spouse_placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            display_language: DisplayLanguage::Both,
            log_level: "info".to_string(),
            spouse_placeholder: DEFAULT_SPOUSE_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.spouse_placeholder.trim().is_empty() {
            return Err("Spouse placeholder cannot be empty".to_string());
        }

        Ok(())
    }
}
