//! Application configuration and first-run initialization.
//!
//! # Responsibility
//! - Locate, load and save the TOML config that points at the item store.
//! - Create the config file and an empty item store on `init`.
//! - Build the record store named by the config.
//!
//! # Invariants
//! - A saved config always names an explicit database path.
//! - `init_app` never truncates an existing item store.

use crate::store::{JsonFileStore, StoreError};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "qklist";
const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DB_FILE_NAME: &str = ".qklist.json";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    /// Config directory could not be created.
    Dir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file could not be read or written.
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    Serialize(toml::ser::Error),
    /// Platform offers no home or config directory.
    MissingHomeDir,
    /// Item store could not be created.
    Store(StoreError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dir { path, source } => write!(
                f,
                "failed to create config directory `{}`: {source}",
                path.display()
            ),
            Self::File { path, source } => {
                write!(f, "failed to access config file `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config file `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to serialize config: {err}"),
            Self::MissingHomeDir => write!(f, "could not determine the home directory"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Dir { source, .. } | Self::File { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::MissingHomeDir => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ConfigError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: PathBuf,
}

impl AppConfig {
    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
        }
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes the config, creating its parent directory when needed.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Dir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(|source| ConfigError::File {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Per-user config directory, e.g. `~/.config/qklist` on Linux.
pub fn config_dir() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(ConfigError::MissingHomeDir)
}

pub fn config_file_path() -> ConfigResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

pub fn default_db_path() -> ConfigResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DB_FILE_NAME))
        .ok_or(ConfigError::MissingHomeDir)
}

/// Saves `config` to `config_path` and creates an empty item store.
pub fn init_app(config_path: &Path, config: &AppConfig) -> ConfigResult<()> {
    config.save(config_path)?;
    JsonFileStore::init(&config.database)?;
    info!("event=app_init module=config status=ok");
    Ok(())
}

/// Opens the item store named by `config`.
///
/// Opening is lazy; a missing file surfaces on first read.
pub fn open_store(config: &AppConfig) -> JsonFileStore {
    JsonFileStore::new(&config.database)
}

#[cfg(test)]
mod tests {
    use super::AppConfig;

    #[test]
    fn config_reads_database_path() {
        let config: AppConfig = toml::from_str("database = \"/tmp/items.json\"").unwrap();
        assert_eq!(config, AppConfig::new("/tmp/items.json"));
    }

    #[test]
    fn config_rejects_missing_database() {
        assert!(toml::from_str::<AppConfig>("").is_err());
    }
}
