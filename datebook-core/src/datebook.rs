//! Datebook root handle: configuration plus store access.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::DatebookConfig;
use crate::error::{DatebookError, DatebookResult};
use crate::store::Store;

#[derive(Clone)]
pub struct Datebook {
    config: DatebookConfig,
}

impl Datebook {
    pub fn load() -> DatebookResult<Self> {
        let config_path = DatebookConfig::config_path()?;

        if !config_path.exists() {
            DatebookConfig::create_default_config(&config_path)?;
        }

        let config: DatebookConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| DatebookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DatebookError::Config(e.to_string()))?;

        Ok(Datebook { config })
    }

    /// Absolute path of the data file, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Returns the data file path in display-friendly form, keeping `~`
    /// instead of expanding to the full home directory.
    pub fn display_path(&self) -> PathBuf {
        self.config.data_file.clone()
    }

    /// Open the item store at the configured location.
    pub fn store(&self) -> Store {
        Store::open(self.data_path())
    }
}
