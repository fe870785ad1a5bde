use crate::error::{ContactError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "contacts.txt";
const DEFAULT_PLACEHOLDER: &str = "N/A";

/// Configuration for a contact book, stored next to the data as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactConfig {
    /// Name of the contacts document inside the scope directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Shown in place of empty fields
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            placeholder: default_placeholder(),
        }
    }
}

impl ContactConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactError::Persistence)?;
        let config: ContactConfig =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactError::Persistence)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactError::Serialization)?;
        fs::write(config_path, content).map_err(ContactError::Persistence)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<&str> {
        match key {
            "file-name" => Ok(&self.file_name),
            "placeholder" => Ok(&self.placeholder),
            other => Err(ContactError::Config(format!("Unknown config key: {}", other))),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file-name" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(ContactError::Config(format!(
                        "Invalid file name: '{}'",
                        value
                    )));
                }
                self.file_name = value.to_string();
            }
            "placeholder" => self.placeholder = value.to_string(),
            other => {
                return Err(ContactError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
