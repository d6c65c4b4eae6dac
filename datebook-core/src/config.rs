//! Global datebook configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DatebookError, DatebookResult};

static DEFAULT_DATA_FILE: &str = "~/.datebook/events.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn is_default_data_file(p: &PathBuf) -> bool {
    *p == default_data_file()
}

/// Global configuration at ~/.config/datebook/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct DatebookConfig {
    #[serde(default = "default_data_file", skip_serializing_if = "is_default_data_file")]
    pub data_file: PathBuf,
}

impl DatebookConfig {
    pub fn config_path() -> DatebookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DatebookError::Config("Could not determine config directory".into()))?
            .join("datebook");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/datebook/config.toml
    pub fn save(&self) -> DatebookResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DatebookError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| DatebookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> DatebookResult<()> {
        let contents = format!(
            "\
# datebook configuration

# Where your items are stored:
# data_file = \"{}\"
",
            DEFAULT_DATA_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DatebookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DatebookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
