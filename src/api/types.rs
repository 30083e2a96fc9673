//! Wire types for the quote API
//!
//! The server is treated as untrusted about shape: every field defaults,
//! numeric fields are optional, and both snake_case and camelCase spellings
//! are accepted. Entries without a symbol are discarded during conversion.

use serde::Deserialize;

use crate::suggest::Suggestion;

/// Raw autocomplete candidate as it appears on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionDto {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default, alias = "currentPrice", alias = "price")]
    pub current_price: Option<f64>,
    #[serde(default, alias = "previousClose")]
    pub previous_close: Option<f64>,
    #[serde(default, alias = "marketCap")]
    pub market_cap: Option<f64>,
    #[serde(default, alias = "avgVolume", alias = "averageVolume")]
    pub avg_volume: Option<f64>,
}

impl SuggestionDto {
    /// Convert to the domain type; candidates with no symbol are unusable.
    pub fn into_suggestion(self) -> Option<Suggestion> {
        let symbol = self.symbol.trim().to_string();
        if symbol.is_empty() {
            return None;
        }
        Some(Suggestion {
            symbol,
            name: self.name.trim().to_string(),
            sector: self.sector.trim().to_string(),
            current_price: self.current_price,
            previous_close: self.previous_close,
            market_cap: self.market_cap,
            avg_volume: self.avg_volume,
            score: 0,
        })
    }
}

/// Envelope of the autocomplete endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestResponseDto {
    #[serde(default)]
    pub suggestions: Vec<SuggestionDto>,
}

impl SuggestResponseDto {
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
            .into_iter()
            .filter_map(SuggestionDto::into_suggestion)
            .collect()
    }
}

/// Full analysis payload for a committed symbol
///
/// A typed partial result: everything except the symbol is optional and the
/// overlay substitutes placeholders for whatever is missing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AnalysisReport {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "currentPrice", alias = "price")]
    pub current_price: Option<f64>,
    #[serde(default, alias = "previousClose")]
    pub previous_close: Option<f64>,
    #[serde(default, alias = "changePercent", alias = "change_pct")]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default, alias = "riskLevel", alias = "risk_level")]
    pub risk: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub headlines: Vec<String>,
}

impl AnalysisReport {
    /// Percent change, preferring the server's figure, else derived
    pub fn effective_change_percent(&self) -> Option<f64> {
        if self.change_percent.is_some() {
            return self.change_percent;
        }
        let current = self.current_price?;
        let previous = self.previous_close?;
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }
}

/// One member of a theme aggregate
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ThemeMember {
    #[serde(default)]
    pub symbol: String,
    #[serde(default, alias = "changePercent")]
    pub change_percent: Option<f64>,
}

/// Theme-level aggregate payload
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ThemeReport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "averageChange")]
    pub average_change: Option<f64>,
    #[serde(default)]
    pub members: Vec<ThemeMember>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
