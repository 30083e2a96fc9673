use std::fs;
use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use super::SearchRecord;
use crate::config::config_dir;

const HISTORY_FILE: &str = "history.toml";

#[derive(Default, Serialize, Deserialize)]
struct HistoryFile {
    #[serde(default)]
    searches: Vec<SearchRecord>,
}

pub fn history_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(HISTORY_FILE))
}

pub fn load_history() -> Vec<SearchRecord> {
    let Some(path) = history_path() else {
        return Vec::new();
    };
    load_history_from_path(&path)
}

pub fn load_history_from_path(path: &PathBuf) -> Vec<SearchRecord> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };

    match toml::from_str::<HistoryFile>(&contents) {
        Ok(file) => file.searches,
        Err(e) => {
            debug!("ignoring malformed history file: {e}");
            Vec::new()
        }
    }
}

/// Best-effort save; history loss is not worth interrupting the user for.
pub fn save_history(records: &[SearchRecord]) {
    let Some(path) = history_path() else {
        return;
    };
    save_history_to_path(records, &path);
}

pub fn save_history_to_path(records: &[SearchRecord], path: &PathBuf) {
    let file = HistoryFile {
        searches: records.to_vec(),
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
        debug!("failed to save history: {e}");
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
