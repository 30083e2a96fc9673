use log::debug;

use crate::api::{AnalysisReport, ThemeReport};

/// What the overlay is showing an analysis of
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisSubject {
    Stock(String),
    Theme(String),
}

impl AnalysisSubject {
    pub fn label(&self) -> &str {
        match self {
            AnalysisSubject::Stock(s) | AnalysisSubject::Theme(s) => s,
        }
    }
}

/// Loaded overlay content
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisView {
    Stock(AnalysisReport),
    Theme(ThemeReport),
}

/// Overlay state machine: hidden → loading → (view | error)
///
/// The subject is kept through failures so the error panel's retry can
/// re-dispatch the same request.
#[derive(Debug, Default)]
pub struct AnalysisState {
    visible: bool,
    loading: bool,
    subject: Option<AnalysisSubject>,
    view: Option<AnalysisView>,
    error: Option<String>,
    /// Id of the newest analysis/theme request; older responses are dropped
    last_request_id: u64,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn subject(&self) -> Option<&AnalysisSubject> {
        self.subject.as_ref()
    }

    pub fn view(&self) -> Option<&AnalysisView> {
        self.view.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Open the overlay in its loading state for a dispatched request.
    pub fn begin(&mut self, subject: AnalysisSubject, request_id: u64) {
        debug!("analysis started for {:?} (request {request_id})", subject);
        self.visible = true;
        self.loading = true;
        self.subject = Some(subject);
        self.view = None;
        self.error = None;
        self.last_request_id = request_id;
    }

    /// Whether a response with this id is still the one being waited on.
    pub fn accepts_response(&self, request_id: u64) -> bool {
        request_id == self.last_request_id
    }

    pub fn complete_stock(&mut self, report: AnalysisReport) {
        self.loading = false;
        self.error = None;
        self.view = Some(AnalysisView::Stock(report));
    }

    pub fn complete_theme(&mut self, report: ThemeReport) {
        self.loading = false;
        self.error = None;
        self.view = Some(AnalysisView::Theme(report));
    }

    /// Record a failure; the previous view (if any) stays rendered behind
    /// the error panel.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Subject to re-dispatch when the user asks to retry a failure.
    pub fn retry_subject(&self) -> Option<AnalysisSubject> {
        if self.error.is_some() {
            self.subject.clone()
        } else {
            None
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.loading = false;
        self.view = None;
        self.error = None;
        self.subject = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
