use crate::error::{Result, SnipzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 40;

/// Keys accepted by `snipz config`, in display order.
pub const CONFIG_KEYS: &[&str] = &["line-width", "copy-on-add"];

/// Configuration for snipz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnipzConfig {
    /// Width of the snippet list, in terminal columns
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Also copy a snippet to the clipboard when it is saved
    #[serde(default)]
    pub copy_on_add: bool,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl Default for SnipzConfig {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            copy_on_add: false,
        }
    }
}

impl SnipzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SnipzError::Io)?;
        let config: SnipzConfig =
            serde_json::from_str(&content).map_err(SnipzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SnipzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SnipzError::Serialization)?;
        fs::write(config_path, content).map_err(SnipzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "line-width" => Some(self.line_width.to_string()),
            "copy-on-add" => Some(self.copy_on_add.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "line-width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    SnipzError::Config(format!("line-width must be a number, got {:?}", value))
                })?;
                if width < MIN_LINE_WIDTH {
                    return Err(SnipzError::Config(format!(
                        "line-width must be at least {}",
                        MIN_LINE_WIDTH
                    )));
                }
                self.line_width = width;
            }
            "copy-on-add" => {
                self.copy_on_add = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(SnipzError::Config(format!(
                            "copy-on-add must be true or false, got {:?}",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(SnipzError::Config(format!(
                    "Unknown config key: {} (known keys: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// `(key, value)` pairs for every setting.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}
