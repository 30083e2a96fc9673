/// A candidate stock match shown in the autocomplete popup
///
/// Constructed fresh from each fetch response (or the fallback catalog),
/// discarded when a newer query supersedes it. Price and liquidity fields
/// are optional: the server may omit any of them and the UI degrades to
/// placeholders instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub current_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub market_cap: Option<f64>,
    pub avg_volume: Option<f64>,
    /// Relevance score assigned at rank time; 0 until ranked
    pub score: i64,
}

impl Suggestion {
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, sector: impl Into<String>) -> Self {
        Suggestion {
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            current_price: None,
            previous_close: None,
            market_cap: None,
            avg_volume: None,
            score: 0,
        }
    }

    /// Percent change from previous close, when both prices are known
    pub fn change_percent(&self) -> Option<f64> {
        let current = self.current_price?;
        let previous = self.previous_close?;
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }
}
