use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Snapshot file name, relative to the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Contacts per page for `list`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Window used by `birthdays` when no `--days` is given
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: i64,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_upcoming_days() -> i64 {
    DEFAULT_UPCOMING_DAYS
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: DEFAULT_PAGE_SIZE,
            upcoming_days: DEFAULT_UPCOMING_DAYS,
        }
    }
}

impl BookConfig {
    pub const KEYS: [&'static str; 3] = ["data-file", "page-size", "upcoming-days"];

    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Values in the file go through the same checks as [`BookConfig::set`].
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BookConfig = serde_json::from_str(&content)
            .map_err(|e| BookError::Config(format!("{}: {}", config_path.display(), e)))?;
        config
            .validate()
            .map_err(|e| BookError::Config(format!("{}: {}", config_path.display(), e)))?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        check_data_file(&self.data_file)?;
        check_page_size(self.page_size)?;
        check_upcoming_days(self.upcoming_days)?;
        Ok(())
    }

    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "page-size" => Some(self.page_size.to_string()),
            "upcoming-days" => Some(self.upcoming_days.to_string()),
            _ => None,
        }
    }

    /// Every key with its current value, in [`BookConfig::KEYS`] order.
    pub fn entries(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect()
    }

    /// Parse and check `value` for `key`. On error nothing changes.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let applied = match key {
            "data-file" => check_data_file(value).map(|()| self.data_file = value.to_string()),
            "page-size" => parse_number(key, value)
                .and_then(check_page_size)
                .map(|size| self.page_size = size),
            "upcoming-days" => parse_number(key, value)
                .and_then(check_upcoming_days)
                .map(|days| self.upcoming_days = days),
            other => Err(format!("Unknown config key: {}", other)),
        };
        applied.map_err(BookError::Config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> std::result::Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("{} expects a number, got '{}'", key, value))
}

fn check_data_file(value: &str) -> std::result::Result<(), String> {
    // "", "." and ".." would resolve to a directory, not a snapshot file.
    if value.trim().is_empty() || Path::new(value).file_name().is_none() {
        return Err(format!("data-file must name a file, got '{}'", value));
    }
    Ok(())
}

fn check_page_size(size: usize) -> std::result::Result<usize, String> {
    if size == 0 {
        return Err("page-size must be a positive number, got '0'".to_string());
    }
    Ok(size)
}

fn check_upcoming_days(days: i64) -> std::result::Result<i64, String> {
    if days < 0 {
        return Err(format!("upcoming-days must be zero or more, got '{}'", days));
    }
    Ok(days)
}
