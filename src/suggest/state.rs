use log::debug;

use super::Suggestion;

/// Autocomplete query state
///
/// Owns the current query text, the ranked suggestion list, and the
/// keyboard selection. `selected` is `None` when nothing is highlighted
/// (Enter then submits the raw input text as a free-text search).
///
/// Selection invariant: whenever `selected` is `Some(i)`, `i` is a valid
/// index into `suggestions`. Every list replacement resets the selection.
#[derive(Debug, Default)]
pub struct SuggestState {
    query: String,
    suggestions: Vec<Suggestion>,
    selected: Option<usize>,
    visible: bool,
    /// True when the current list came from the offline catalog
    fallback: bool,
    /// Id of the newest suggestion request; older responses are dropped
    last_request_id: u64,
}

impl SuggestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_suggestion(&self) -> Option<&Suggestion> {
        self.selected.and_then(|i| self.suggestions.get(i))
    }

    /// Record the query text a fetch is about to run for.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
        }
    }

    /// Mark `request_id` as the newest in-flight suggestion request.
    pub fn track_request(&mut self, request_id: u64) {
        self.last_request_id = request_id;
    }

    pub fn last_request_id(&self) -> u64 {
        self.last_request_id
    }

    /// Whether a response with this id is still current. Out-of-order
    /// completions from superseded queries fail this check and must not
    /// overwrite the rendered list.
    pub fn accepts_response(&self, request_id: u64) -> bool {
        request_id == self.last_request_id
    }

    /// Replace the suggestion list with freshly ranked results.
    pub fn update_suggestions(&mut self, suggestions: Vec<Suggestion>, fallback: bool) {
        debug!(
            "suggestions updated: {} candidates (fallback: {})",
            suggestions.len(),
            fallback
        );
        self.suggestions = suggestions;
        self.fallback = fallback;
        self.selected = None;
        self.visible = !self.suggestions.is_empty();
    }

    /// Close the popup and drop the list and selection.
    pub fn clear(&mut self) {
        self.suggestions.clear();
        self.selected = None;
        self.visible = false;
        self.fallback = false;
    }

    /// Close the popup but keep the list (re-opened on next update).
    pub fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    /// ArrowDown: step the selection down, clamped at the last entry.
    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        let last = self.suggestions.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// ArrowUp: step the selection up; from the first entry it returns to
    /// the no-selection state.
    pub fn select_prev(&mut self) {
        self.selected = match self.selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
