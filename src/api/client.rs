use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use super::types::{AnalysisReport, SuggestResponseDto, ThemeReport};
use crate::error::TickscoutError;
use crate::suggest::Suggestion;

/// Errors from a single API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Human-readable message for the inline error panel
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Could not reach the analysis service. Check your connection.".to_string()
            }
            ApiError::Status(code) => {
                format!("The analysis service returned an error (HTTP {code}).")
            }
            ApiError::Decode(_) => {
                "The analysis service returned an unreadable response.".to_string()
            }
        }
    }
}

/// Synchronous facade over the quote API
///
/// Owned by the fetch worker thread; drives async reqwest on a private
/// current-thread runtime so callers stay plain blocking functions.
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_ms: u64) -> Result<Self, TickscoutError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| TickscoutError::InvalidApiUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TickscoutError::InvalidApiUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!("tickscout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TickscoutError::Io(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TickscoutError::Io(e.to_string()))?;

        Ok(ApiClient {
            base_url,
            http,
            runtime,
        })
    }

    /// `GET /api/search-autocomplete?q=<text>&limit=<n>`
    ///
    /// An empty query is the "popular suggestions" variant and omits `q`.
    pub fn fetch_suggestions(&self, query: &str, limit: usize) -> Result<Vec<Suggestion>, ApiError> {
        let url = self.endpoint(&["api", "search-autocomplete"])?;
        let query = query.trim();

        self.runtime.block_on(async {
            let mut request = self.http.get(url);
            if !query.is_empty() {
                request = request.query(&[("q", query)]);
            }
            let response = request
                .query(&[("limit", limit.to_string())])
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }

            let envelope: SuggestResponseDto = response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(envelope.into_suggestions())
        })
    }

    /// `POST /api/stock-search` with `{"query": symbol}`
    pub fn fetch_analysis(&self, symbol: &str) -> Result<AnalysisReport, ApiError> {
        let url = self.endpoint(&["api", "stock-search"])?;

        self.runtime.block_on(async {
            let response = self
                .http
                .post(url)
                .json(&serde_json::json!({ "query": symbol }))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
    }

    /// `GET /api/search-theme/<name>`
    pub fn fetch_theme(&self, name: &str) -> Result<ThemeReport, ApiError> {
        let url = self.endpoint(&["api", "search-theme", name])?;

        self.runtime.block_on(async {
            let response = self
                .http
                .get(url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status(status.as_u16()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
    }

    /// Join path segments onto the base URL (segments are percent-encoded)
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("invalid base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
