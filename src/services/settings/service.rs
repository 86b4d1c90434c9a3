use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const CONFIG_FILE_NAME: &str = "config.toml";
const DATABASE_FILE_NAME: &str = "devotees.db";

/// Loads and saves the TOML settings file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file in the platform config directory, falling back to the
    /// current directory when no home directory can be resolved.
    pub fn with_default_path() -> Self {
        let path = match project_dirs() {
            Some(dirs) => dirs.config_dir().join(CONFIG_FILE_NAME),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for config");
                PathBuf::from(CONFIG_FILE_NAME)
            }
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings, returning defaults when the file does not exist.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!("No settings file at {}; using defaults", self.path.display());
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write settings to {}", self.path.display()))?;
        Ok(())
    }
}

/// Database location: the configured path, else `<data_dir>/devotees.db`.
pub fn resolve_database_path(settings: &Settings) -> PathBuf {
    if let Some(path) = &settings.database_path {
        return path.clone();
    }

    match project_dirs() {
        Some(dirs) => dirs.data_dir().join(DATABASE_FILE_NAME),
        None => {
            log::warn!("Unable to resolve project directory; using current dir for database");
            PathBuf::from(DATABASE_FILE_NAME)
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "DevoteeRecords", "DevoteeRecords")
}
