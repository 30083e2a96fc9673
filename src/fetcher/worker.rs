use std::sync::mpsc::{self, Receiver, Sender};

use log::debug;

use crate::api::{AnalysisReport, ApiClient, ApiError, ThemeReport};
use crate::suggest::{Suggestion, catalog};

/// Request messages sent to the fetch worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    /// Candidate matches for a query; an empty query asks for the
    /// "popular suggestions" variant
    Suggestions {
        query: String,
        limit: usize,
        request_id: u64,
    },
    /// Full analysis for a committed symbol
    Analysis { symbol: String, request_id: u64 },
    /// Theme-level aggregate
    Theme { name: String, request_id: u64 },
}

/// Response messages received from the fetch worker thread
#[derive(Debug)]
pub enum FetchResponse {
    Suggestions {
        candidates: Vec<Suggestion>,
        /// True when the candidates came from the offline catalog
        fallback: bool,
        request_id: u64,
    },
    Analysis {
        result: Result<AnalysisReport, ApiError>,
        symbol: String,
        request_id: u64,
    },
    Theme {
        result: Result<ThemeReport, ApiError>,
        name: String,
        request_id: u64,
    },
}

/// Main-thread handle to the worker: dispatches requests, assigns ids
pub struct FetcherHandle {
    request_tx: Sender<FetchRequest>,
    pub(crate) response_rx: Receiver<FetchResponse>,
    next_id: u64,
}

impl FetcherHandle {
    fn next_request_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Send a suggestion fetch; returns the id to match the response against.
    pub fn dispatch_suggestions(&mut self, query: &str, limit: usize) -> u64 {
        let request_id = self.next_request_id();
        let _ = self.request_tx.send(FetchRequest::Suggestions {
            query: query.to_string(),
            limit,
            request_id,
        });
        request_id
    }

    pub fn dispatch_analysis(&mut self, symbol: &str) -> u64 {
        let request_id = self.next_request_id();
        let _ = self.request_tx.send(FetchRequest::Analysis {
            symbol: symbol.to_string(),
            request_id,
        });
        request_id
    }

    pub fn dispatch_theme(&mut self, name: &str) -> u64 {
        let request_id = self.next_request_id();
        let _ = self.request_tx.send(FetchRequest::Theme {
            name: name.to_string(),
            request_id,
        });
        request_id
    }

    /// Non-blocking poll for the next completed response.
    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.response_rx.try_recv().ok()
    }
}

/// Spawn the fetch worker thread.
///
/// `client` is `None` in offline mode; the worker then answers suggestion
/// requests from the catalog and fails analysis/theme requests locally.
pub fn spawn_worker(client: Option<ApiClient>) -> FetcherHandle {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });

    FetcherHandle {
        request_tx,
        response_rx,
        next_id: 0,
    }
}

/// Process requests until the channel is closed
fn worker_loop(
    client: Option<ApiClient>,
    request_rx: Receiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            FetchRequest::Suggestions {
                query,
                limit,
                request_id,
            } => handle_suggestions(&client, &query, limit, request_id),
            FetchRequest::Analysis { symbol, request_id } => {
                let result = match &client {
                    Some(c) => c.fetch_analysis(&symbol),
                    None => Err(offline_error()),
                };
                FetchResponse::Analysis {
                    result,
                    symbol,
                    request_id,
                }
            }
            FetchRequest::Theme { name, request_id } => {
                let result = match &client {
                    Some(c) => c.fetch_theme(&name),
                    None => Err(offline_error()),
                };
                FetchResponse::Theme {
                    result,
                    name,
                    request_id,
                }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop working
            return;
        }
    }

    debug!("fetch worker thread shutting down");
}

/// Suggestion failures never surface as errors: substitute the catalog.
fn handle_suggestions(
    client: &Option<ApiClient>,
    query: &str,
    limit: usize,
    request_id: u64,
) -> FetchResponse {
    if let Some(client) = client {
        match client.fetch_suggestions(query, limit) {
            Ok(candidates) => {
                return FetchResponse::Suggestions {
                    candidates,
                    fallback: false,
                    request_id,
                };
            }
            Err(e) => {
                debug!("suggestion fetch failed, using catalog: {e}");
            }
        }
    }

    FetchResponse::Suggestions {
        candidates: catalog::fallback_matches(query),
        fallback: true,
        request_id,
    }
}

fn offline_error() -> ApiError {
    ApiError::Transport("running in offline mode".to_string())
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
