//! Configuration loading
//!
//! Reads `~/.config/tickscout/config.toml`. A missing file yields defaults;
//! a malformed file yields defaults plus an error the caller can surface as
//! a notification instead of aborting startup.

mod types;

use std::fs;
use std::path::PathBuf;

pub use types::{ApiConfig, Config, SearchConfig, ThemePreference, UiConfig};

use crate::error::TickscoutError;

const CONFIG_DIR: &str = "tickscout";
const CONFIG_FILE: &str = "config.toml";

pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// Load the config file, falling back to defaults.
///
/// Returns the config plus an optional load error. The error is informational:
/// the returned config is always usable.
pub fn load_config() -> (Config, Option<TickscoutError>) {
    let Some(path) = config_path() else {
        return (Config::default(), Some(TickscoutError::NoConfigDir));
    };

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &PathBuf) -> (Config, Option<TickscoutError>) {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        // Missing file is the common case on first run, not an error
        Err(_) => return (Config::default(), None),
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => (config, None),
        Err(e) => (
            Config::default(),
            Some(TickscoutError::InvalidConfig(e.to_string())),
        ),
    }
}
