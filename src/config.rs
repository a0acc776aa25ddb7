use crate::error::{Error, Result};
use crate::theme::ThemeStorage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub preview: PreviewConfig,
    pub window: WindowConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "light-mode" or "dark-mode"; unset follows the system theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Preview behavior configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PreviewConfig {
    /// Largest file (in bytes) the reader will load
    pub max_preview_size: u64,
    /// How long notifications stay visible
    pub message_timeout_secs: u64,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            max_preview_size: 50 * 1024 * 1024,
            message_timeout_secs: 3,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 900.0,
            height: 640.0,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "filepeek")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location.
    ///
    /// The flag is false when the file exists but could not be loaded; the
    /// defaults are used and the file should not be written back.
    pub fn load() -> (Self, bool) {
        match Self::config_path() {
            Some(path) => match Self::load_from(&path) {
                Ok(config) => (config, true),
                Err(e) => {
                    log::warn!("{}; using default configuration", e);
                    (Config::default(), false)
                }
            },
            None => (Config::default(), true),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

/// Theme storage backed by the config file; each save rewrites the file.
pub struct ConfigThemeStorage {
    config: Config,
    path: Option<PathBuf>,
    preserve_file: bool,
}

impl ConfigThemeStorage {
    pub fn new(config: Config, path: Option<PathBuf>) -> Self {
        Self {
            config,
            path,
            preserve_file: false,
        }
    }

    /// Never write the file. Used when it failed to load, so the user's
    /// settings are not replaced by defaults.
    pub fn preserving_file(mut self) -> Self {
        self.preserve_file = true;
        self
    }
}

impl ThemeStorage for ConfigThemeStorage {
    fn load(&self) -> Option<String> {
        self.config.theme.mode.clone()
    }

    fn save(&mut self, token: &str) -> Result<()> {
        self.config.theme.mode = Some(token.to_string());
        let path = self.path.as_deref().ok_or(Error::NoConfigDir)?;
        if self.preserve_file {
            log::warn!("Not saving theme to {}: file failed to load", path.display());
            return Err(Error::ConfigUnreadable(path.to_path_buf()));
        }
        self.config.save_to(path)
    }
}
