//! Configuration loading and defaults.
//!
//! Layered sources, lowest to highest precedence: built-in defaults,
//! `stockpile.toml` in the working directory, `STOCKPILE_*` environment
//! variables (with `__` separating nested keys, e.g.
//! `STOCKPILE_STORAGE__DATA_FILE`).

use crate::logging::LoggingConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = "stockpile.toml";

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file for inventory records (default: inventory.txt)
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("inventory.txt")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl StorageConfig {
    /// Resolve the backing file path against the working root when it is
    /// relative.
    pub fn resolve_data_file(&self, root: &Path) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            root.join(&self.data_file)
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockpileConfig {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from files and environment.
    pub fn load(root: &Path) -> Result<StockpileConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(root.join(CONFIG_FILE_NAME)).required(false))
            .add_source(
                Environment::with_prefix("STOCKPILE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<StockpileConfig, ConfigError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(
                Environment::with_prefix("STOCKPILE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        builder.build()?.try_deserialize()
    }
}
