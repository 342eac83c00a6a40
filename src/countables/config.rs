use crate::error::{CountablesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "countables.json";

/// Configuration for countables, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountablesConfig {
    /// File name of the collection snapshot inside the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Pretty-print the snapshot JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_pretty() -> bool {
    true
}

impl Default for CountablesConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            pretty: default_pretty(),
        }
    }
}

impl CountablesConfig {
    pub const KEYS: &'static [&'static str] = &["data-file", "pretty"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CountablesError::Io)?;
        let config: CountablesConfig =
            serde_json::from_str(&content).map_err(CountablesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CountablesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CountablesError::Serialization)?;
        fs::write(config_path, content).map_err(CountablesError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(|c: char| c == '/' || c == '\\') {
                    return Err(CountablesError::Config(format!(
                        "data-file must be a plain file name, got \"{}\"",
                        value
                    )));
                }
                self.data_file = value.to_string();
                Ok(())
            }
            "pretty" => {
                self.pretty = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(CountablesError::Config(format!(
                            "pretty expects true or false, got \"{}\"",
                            other
                        )))
                    }
                };
                Ok(())
            }
            other => Err(CountablesError::Config(format!(
                "Unknown config key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CountablesConfig::default();
        assert_eq!(config.data_file, "countables.json");
        assert!(config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = CountablesConfig::load(dir.path()).unwrap();
        assert_eq!(config, CountablesConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = CountablesConfig::default();
        config.set("data-file", "birds.json").unwrap();
        config.set("pretty", "off").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = CountablesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "birds.json");
        assert!(!loaded.pretty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"pretty": false}"#).unwrap();
        let loaded = CountablesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "countables.json");
        assert!(!loaded.pretty);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = CountablesConfig::default();
        assert_eq!(config.get("data-file").as_deref(), Some("countables.json"));
        assert_eq!(config.get("pretty").as_deref(), Some("true"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = CountablesConfig::default();
        assert!(config.set("data-file", "../escape.json").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("pretty", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, CountablesConfig::default());
    }
}
