//! Reading and writing `config.json`. Bad keys and values are errors, not messages.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::BookConfig;
use crate::error::{BookError, Result};
use std::path::Path;

/// Show one key, or every key when `key` is `None`.
pub fn show(config_dir: &Path, key: Option<&str>) -> Result<CmdResult> {
    let config = BookConfig::load(config_dir)?;
    let entries = match key {
        None => config.entries(),
        Some(key) => {
            let value = config
                .get(key)
                .ok_or_else(|| BookError::Config(format!("Unknown config key: {}", key)))?;
            vec![(key.to_string(), value)]
        }
    };
    Ok(CmdResult::default().with_config_entries(entries))
}

pub fn set(config_dir: &Path, key: &str, value: &str) -> Result<CmdResult> {
    let mut config = BookConfig::load(config_dir)?;
    config.set(key, value)?;
    config.save(config_dir)?;

    let stored = config.get(key).unwrap_or_else(|| value.to_string());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
    Ok(result.with_config_entries(vec![(key.to_string(), stored)]))
}
