use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::AnalysisReport;

/// One pinned symbol with its last seen quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchEntry {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_price: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    pub added_at: DateTime<Utc>,
}

/// Watchlist pane state
#[derive(Debug, Default)]
pub struct WatchlistState {
    entries: Vec<WatchEntry>,
    selected: Option<usize>,
}

impl WatchlistState {
    pub fn new(entries: Vec<WatchEntry>) -> Self {
        WatchlistState {
            entries,
            selected: None,
        }
    }

    pub fn entries(&self) -> &[WatchEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&WatchEntry> {
        self.selected.and_then(|i| self.entries.get(i))
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Pin a symbol from its analysis report. Re-adding an existing symbol
    /// refreshes its quote instead of duplicating the row. Returns true
    /// when a new row was added.
    pub fn add_from_report(&mut self, report: &AnalysisReport) -> bool {
        let symbol = report.symbol.trim();
        if symbol.is_empty() {
            return false;
        }

        let change = report.effective_change_percent();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
        {
            existing.last_price = report.current_price.or(existing.last_price);
            existing.change_percent = change.or(existing.change_percent);
            return false;
        }

        self.entries.push(WatchEntry {
            symbol: symbol.to_uppercase(),
            name: report.name.clone(),
            last_price: report.current_price,
            change_percent: change,
            added_at: Utc::now(),
        });
        true
    }

    /// Drop the highlighted row, returning it for the notification.
    pub fn remove_selected(&mut self) -> Option<WatchEntry> {
        let index = self.selected?;
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        if self.entries.is_empty() {
            self.selected = None;
        } else {
            self.selected = Some(index.min(self.entries.len() - 1));
        }
        Some(removed)
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => 0,
            Some(i) => i - 1,
        });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
