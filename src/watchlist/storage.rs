use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use super::WatchEntry;
use crate::config::config_dir;

const WATCHLIST_FILE: &str = "watchlist.toml";

#[derive(Default, Serialize, Deserialize)]
struct WatchlistFile {
    #[serde(default)]
    entries: Vec<WatchEntry>,
}

pub fn watchlist_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(WATCHLIST_FILE))
}

pub fn load_watchlist() -> Vec<WatchEntry> {
    let Some(path) = watchlist_path() else {
        return Vec::new();
    };
    load_watchlist_from_path(&path)
}

pub fn load_watchlist_from_path(path: &PathBuf) -> Vec<WatchEntry> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    match toml::from_str::<WatchlistFile>(&contents) {
        Ok(file) => file.entries,
        Err(e) => {
            debug!("ignoring malformed watchlist file: {e}");
            Vec::new()
        }
    }
}

pub fn save_watchlist(entries: &[WatchEntry]) {
    let Some(path) = watchlist_path() else {
        return;
    };
    save_watchlist_to_path(entries, &path);
}

pub fn save_watchlist_to_path(entries: &[WatchEntry], path: &PathBuf) {
    let file = WatchlistFile {
        entries: entries.to_vec(),
    };

    let Ok(contents) = toml::to_string_pretty(&file) else {
        return;
    };

    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }

    if let Err(e) = fs::write(path, contents) {
        debug!("failed to save watchlist: {e}");
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
