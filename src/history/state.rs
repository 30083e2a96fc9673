use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::matcher::HistoryMatcher;

/// Newest-first cap on persisted searches
pub const MAX_HISTORY_RECORDS: usize = 50;

/// One committed search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub query: String,
    pub searched_at: DateTime<Utc>,
}

impl SearchRecord {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRecord {
            query: query.into(),
            searched_at: Utc::now(),
        }
    }
}

/// Search-history popup state
///
/// Records are newest-first. The popup filters them with a fuzzy matcher
/// against whatever is in the input field when it opens.
#[derive(Debug)]
pub struct HistoryState {
    records: Vec<SearchRecord>,
    matcher: HistoryMatcher,
    visible: bool,
    /// Indices into `records`, in display order
    filtered: Vec<usize>,
    selected: Option<usize>,
}

impl Default for HistoryState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl HistoryState {
    pub fn new(records: Vec<SearchRecord>) -> Self {
        HistoryState {
            records,
            matcher: HistoryMatcher::new(),
            visible: false,
            filtered: Vec::new(),
            selected: None,
        }
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Records currently shown, in display order.
    pub fn visible_records(&self) -> Vec<&SearchRecord> {
        self.filtered
            .iter()
            .filter_map(|&i| self.records.get(i))
            .collect()
    }

    /// Remember a committed search. Re-searching an old query moves it to
    /// the front instead of duplicating it.
    pub fn record_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.records
            .retain(|r| !r.query.eq_ignore_ascii_case(query));
        self.records.insert(0, SearchRecord::new(query));
        self.records.truncate(MAX_HISTORY_RECORDS);
    }

    /// Open the popup, filtering against the given text.
    pub fn open(&mut self, filter: &str) {
        self.filtered = self.matcher.filter(filter, &self.records);
        self.selected = if self.filtered.is_empty() { None } else { Some(0) };
        self.visible = !self.filtered.is_empty();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.filtered.clear();
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn select_prev(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None | Some(0) => 0,
            Some(i) => i - 1,
        });
    }

    /// Query of the highlighted record, for Enter to re-run.
    pub fn selected_query(&self) -> Option<&str> {
        let display_index = self.selected?;
        let record_index = *self.filtered.get(display_index)?;
        self.records.get(record_index).map(|r| r.query.as_str())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
