//! Application settings - persisted user preferences.
//!
//! Settings are read once at startup. A missing or unreadable file gives the
//! defaults, so the app always starts.

use std::path::{Path, PathBuf};

use galaxy_model::Table;
use galaxy_tutor::TutorSettings;
use serde::{Deserialize, Serialize};

/// File name of the key-value store inside the data directory.
pub const STORAGE_FILE: &str = "storage.json";

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// AI tutor settings.
    pub tutor: TutorSettings,
}

/// The `[general]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Table selected at startup.
    pub default_table: Table,

    /// Where progress is stored. Defaults to the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            default_table: Table::default_selection(),
            data_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default path when `None`.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::config_path().map_or_else(Self::default, |p| Self::load_from(&p)),
        }
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "no settings file, using defaults");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Get the default config file path.
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("settings.toml"))
    }

    /// Resolve the storage file: `override_dir`, then the configured data
    /// directory, then the platform data directory.
    pub fn storage_path(&self, override_dir: Option<&Path>) -> Option<PathBuf> {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.general.data_dir.clone())
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .map(|dir| dir.join(STORAGE_FILE))
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "MathGalaxy", "math-galaxy")
}
