//! Application configuration persisted as `config.json`.

mod app_config;

pub use app_config::{
    ClipboardHistoryConfig, Config, InputMethodConfig, LinksConfig, ToastConfig, WindowConfig,
};

use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, OnceLock};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Path passed via `--config`, set once before the config is first read
static CONFIG_PATH_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// Global configuration, loaded on first access
pub static CONFIG: LazyLock<RwLock<Config>> =
    LazyLock::new(|| RwLock::new(Config::load_or_default(&Config::path())));

/// Use `path` instead of the platform config location (only first call takes effect)
pub fn set_config_path(path: impl Into<PathBuf>) {
    let _ = CONFIG_PATH_OVERRIDE.set(path.into());
}

impl Config {
    /// Get the config file path (config.json in the platform config directory)
    pub fn path() -> PathBuf {
        const FILENAME: &str = "config.json";
        if let Some(path) = CONFIG_PATH_OVERRIDE.get() {
            return path.clone();
        }

        if let Some(mut path) = dirs::config_dir() {
            path.push("florisboard");
            path.push(FILENAME);
            return path;
        }

        // Fallback to home directory
        if let Some(mut path) = dirs::home_dir() {
            path.push(".florisboard");
            path.push(FILENAME);
            return path;
        }

        PathBuf::from(FILENAME)
    }

    /// Load config from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(%e, "Using default configuration");
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }
}
