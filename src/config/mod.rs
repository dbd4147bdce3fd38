use serde::{Deserialize, Serialize};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const CONFIG_ENV: &str = "EXPENSE_TRACKER_CONFIG";
const CONFIG_DIR_NAME: &str = "expense-tracker";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// User preferences for the shell. Expenses themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: bool,
    pub history_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            history_limit: 100,
        }
    }
}

/// Locates and reads the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: Option<PathBuf>,
    explicit: bool,
}

impl ConfigManager {
    /// Uses `EXPENSE_TRACKER_CONFIG` when set, otherwise the platform config directory.
    pub fn new() -> Self {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::with_path(PathBuf::from(path)),
            _ => Self {
                path: dirs::config_dir()
                    .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)),
                explicit: false,
            },
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            explicit: true,
        }
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    ///
    /// A broken file at the default location only logs a warning; a broken
    /// file the user pointed at explicitly is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(Config::default());
        };
        if !path.exists() {
            return Ok(Config::default());
        }
        match read_config(path) {
            Ok(config) => Ok(config),
            Err(err) if !self.explicit => {
                tracing::warn!(error = %err, "ignoring unreadable configuration");
                Ok(Config::default())
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
