//! Offline fallback catalog
//!
//! A small fixed set of well-known symbols used when the autocomplete
//! endpoint is unreachable or returns a non-success status. Matching is a
//! case-insensitive substring check on symbol, name, or sector.

use super::Suggestion;

struct CatalogEntry {
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    price: f64,
    previous_close: f64,
    market_cap: f64,
    avg_volume: f64,
}

// Reference prices are stale by definition; they exist so the popup still
// shows plausible magnitudes when offline.
const CATALOG: &[CatalogEntry] = &[
    entry("AAPL", "Apple Inc.", "Technology", 214.30, 212.50, 3.3e12, 5.6e7),
    entry("MSFT", "Microsoft Corporation", "Technology", 452.10, 449.80, 3.4e12, 2.1e7),
    entry("GOOGL", "Alphabet Inc.", "Technology", 182.60, 181.90, 2.3e12, 2.4e7),
    entry("AMZN", "Amazon.com Inc.", "Consumer Discretionary", 198.40, 196.10, 2.1e12, 3.8e7),
    entry("NVDA", "NVIDIA Corporation", "Technology", 131.20, 128.70, 3.2e12, 2.9e8),
    entry("META", "Meta Platforms Inc.", "Technology", 540.20, 534.60, 1.4e12, 1.4e7),
    entry("TSLA", "Tesla Inc.", "Consumer Discretionary", 248.90, 252.30, 7.9e11, 9.2e7),
    entry("JPM", "JPMorgan Chase & Co.", "Financials", 212.70, 211.40, 6.1e11, 8.4e6),
    entry("V", "Visa Inc.", "Financials", 281.50, 280.20, 5.7e11, 5.9e6),
    entry("JNJ", "Johnson & Johnson", "Healthcare", 158.10, 157.60, 3.8e11, 7.1e6),
    entry("UNH", "UnitedHealth Group", "Healthcare", 512.40, 508.80, 4.7e11, 3.3e6),
    entry("PFE", "Pfizer Inc.", "Healthcare", 27.80, 27.95, 1.6e11, 3.6e7),
    entry("WMT", "Walmart Inc.", "Consumer Staples", 68.20, 67.80, 5.5e11, 1.7e7),
    entry("PG", "Procter & Gamble", "Consumer Staples", 168.90, 169.30, 4.0e11, 6.2e6),
    entry("KO", "Coca-Cola Company", "Consumer Staples", 63.10, 62.90, 2.7e11, 1.2e7),
    entry("XOM", "Exxon Mobil Corporation", "Energy", 113.60, 114.20, 5.1e11, 1.5e7),
    entry("CVX", "Chevron Corporation", "Energy", 152.30, 151.70, 2.8e11, 7.8e6),
    entry("AMD", "Advanced Micro Devices", "Technology", 162.70, 159.40, 2.6e11, 5.4e7),
    entry("INTC", "Intel Corporation", "Technology", 30.90, 31.20, 1.3e11, 4.8e7),
    entry("DIS", "Walt Disney Company", "Communication Services", 92.40, 91.80, 1.7e11, 9.6e6),
    entry("NFLX", "Netflix Inc.", "Communication Services", 651.30, 644.90, 2.8e11, 3.1e6),
    entry("BA", "Boeing Company", "Industrials", 178.20, 180.10, 1.1e11, 6.7e6),
];

const fn entry(
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    price: f64,
    previous_close: f64,
    market_cap: f64,
    avg_volume: f64,
) -> CatalogEntry {
    CatalogEntry {
        symbol,
        name,
        sector,
        price,
        previous_close,
        market_cap,
        avg_volume,
    }
}

impl CatalogEntry {
    fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            symbol: self.symbol.to_string(),
            name: self.name.to_string(),
            sector: self.sector.to_string(),
            current_price: Some(self.price),
            previous_close: Some(self.previous_close),
            market_cap: Some(self.market_cap),
            avg_volume: Some(self.avg_volume),
            score: 0,
        }
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.symbol.to_lowercase().contains(query_lower)
            || self.name.to_lowercase().contains(query_lower)
            || self.sector.to_lowercase().contains(query_lower)
    }
}

/// Substring-match the query against the catalog, in stable catalog order.
///
/// An empty query returns the whole catalog (the offline stand-in for the
/// "popular suggestions" variant); callers apply their own result cap.
pub fn fallback_matches(query: &str) -> Vec<Suggestion> {
    let query_lower = query.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|e| query_lower.is_empty() || e.matches(&query_lower))
        .map(CatalogEntry::to_suggestion)
        .collect()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
