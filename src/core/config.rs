use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default notes folder, relative to the vault root.
pub const DEFAULT_FOLDER: &str = "eBird Notes";

/// Default key for the public eBird search API.
pub const DEFAULT_API_KEY: &str = "jfekjedvescr";

/// Filesystem layout for birdnote data
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for birdnote data
    pub base_dir: PathBuf,
    /// Path to the persisted settings file
    pub settings_path: PathBuf,
}

impl Config {
    /// Get the default configuration directory
    pub fn default_base_dir() -> Result<PathBuf> {
        dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))
            .map(|home| home.join(".birdnote"))
    }

    /// Create a new configuration
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.unwrap_or_else(|| {
            Self::default_base_dir().unwrap_or_else(|_| PathBuf::from(".birdnote"))
        });

        Ok(Self {
            settings_path: base_dir.join("settings.json"),
            base_dir,
        })
    }

    /// Initialize the configuration directory
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }

    /// Check if the configuration is already initialized
    pub fn is_initialized(&self) -> bool {
        self.base_dir.exists()
    }
}

/// User-configurable settings, persisted as JSON.
///
/// The persisted schema is `{ "folder": ..., "ebirdApiKey": ... }`. Loading
/// merges persisted data over the defaults: a missing file or a missing field
/// falls back to the default value. Neither the folder nor the key is
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Folder the notes are created in, relative to the vault root
    #[serde(default = "default_folder")]
    pub folder: String,
    /// API key sent with every taxonomy lookup
    #[serde(rename = "ebirdApiKey", default = "default_api_key")]
    pub ebird_api_key: String,
}

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            ebird_api_key: default_api_key(),
        }
    }
}

impl Settings {
    /// Load settings, merging persisted data over the defaults
    pub fn load(config: &Config) -> Result<Self> {
        if !config.settings_path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&config.settings_path)?;
        serde_json::from_str(&raw).map_err(|e| {
            Error::Config(format!(
                "Invalid settings file {}: {}",
                config.settings_path.display(),
                e
            ))
        })
    }

    /// Persist settings immediately
    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = config.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&config.settings_path, json)?;
        Ok(())
    }
}
