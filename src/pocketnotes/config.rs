//! # Configuration
//!
//! Stored as `config.json` next to the note data. Missing file or missing keys
//! fall back to compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `notes.json` | File name of the note collection inside the data dir |
//! | `suggestion-limit` | `6` | Max tag suggestions offered by the editor |
//! | `preview-lines` | `4` | Content lines shown per note in listings |

use crate::editor::DEFAULT_SUGGESTION_LIMIT;
use crate::error::{NotesError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PREVIEW_LINES: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    #[serde(default = "default_preview_lines")]
    pub preview_lines: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_preview_lines() -> usize {
    DEFAULT_PREVIEW_LINES
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            suggestion_limit: default_suggestion_limit(),
            preview_lines: default_preview_lines(),
        }
    }
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotesError::Io)?;
        let config: NotesConfig =
            serde_json::from_str(&content).map_err(NotesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotesError::Serialization)?;
        fs::write(config_path, content).map_err(NotesError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "suggestion-limit" => Some(self.suggestion_limit.to_string()),
            "preview-lines" => Some(self.preview_lines.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid data file name: {:?}", value));
                }
                self.data_file = value.to_string();
            }
            "suggestion-limit" => self.suggestion_limit = parse_count(key, value)?,
            "preview-lines" => self.preview_lines = parse_count(key, value)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            ("data-file", self.data_file.clone()),
            ("suggestion-limit", self.suggestion_limit.to_string()),
            ("preview-lines", self.preview_lines.to_string()),
        ]
    }
}

fn parse_count(key: &str, value: &str) -> std::result::Result<usize, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} expects a non-negative number, got {:?}", key, value))
}
