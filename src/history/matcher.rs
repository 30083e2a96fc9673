use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::SearchRecord;

pub struct HistoryMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for HistoryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryMatcher").finish_non_exhaustive()
    }
}

impl Default for HistoryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Filter records against the filter text, best matches first.
    ///
    /// Space-separated terms must all match (AND logic, like fzf). An empty
    /// filter keeps every record in its original order.
    pub fn filter(&self, filter: &str, records: &[SearchRecord]) -> Vec<usize> {
        let terms: Vec<&str> = filter.split_whitespace().collect();
        if terms.is_empty() {
            return (0..records.len()).collect();
        }

        let mut scored: Vec<(usize, i64)> = records
            .iter()
            .enumerate()
            .filter_map(|(idx, record)| {
                let mut total_score: i64 = 0;
                for term in &terms {
                    match self.matcher.fuzzy_match(&record.query, term) {
                        Some(score) => total_score += score,
                        None => return None, // Term didn't match, exclude record
                    }
                }
                Some((idx, total_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored.into_iter().map(|(idx, _)| idx).collect()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
