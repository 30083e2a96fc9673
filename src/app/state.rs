use log::debug;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::analysis::{AnalysisState, AnalysisSubject};
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::fetcher::{FetchResponse, FetcherHandle};
use crate::help::HelpPopupState;
use crate::history::HistoryState;
use crate::notification::NotificationState;
use crate::suggest::{SuggestState, ranker};
use crate::theme::Theme;
use crate::watchlist::WatchlistState;

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    WatchlistPane,
}

/// Application state
///
/// Owns every component's state; key handlers and response routing mutate
/// it explicitly. Nothing here is shared or global.
pub struct App {
    pub input: TextArea<'static>,
    pub focus: Focus,
    pub config: Config,
    pub theme: Theme,
    pub debouncer: Debouncer,
    pub fetcher: FetcherHandle,
    pub suggest: SuggestState,
    pub analysis: AnalysisState,
    pub watchlist: WatchlistState,
    pub history: HistoryState,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: Config, fetcher: FetcherHandle) -> Self {
        let mut input = TextArea::default();
        input.set_block(Block::default().borders(Borders::ALL).title(" Search "));
        input.set_placeholder_text("Symbol, company, or sector…");
        // Remove default underline from cursor line
        input.set_cursor_line_style(Style::default());

        let theme = Theme::from_preference(config.ui.theme);
        let debouncer = Debouncer::new(config.search.debounce_ms);

        Self {
            input,
            focus: Focus::InputField,
            theme,
            debouncer,
            fetcher,
            config,
            suggest: SuggestState::new(),
            analysis: AnalysisState::new(),
            watchlist: WatchlistState::default(),
            history: HistoryState::default(),
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current input text (single-line field)
    pub fn input_text(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    /// Replace the input field content, cursor at the end
    pub fn set_input_text(&mut self, text: &str) {
        self.input.select_all();
        self.input.cut();
        self.input.insert_str(text);
    }

    /// React to a content-changing keystroke in the input field.
    ///
    /// Clearing the field closes the popup without any fetch; anything else
    /// (re)arms the debounce timer.
    pub fn on_input_changed(&mut self) {
        let query = self.input_text().trim().to_string();
        if query.is_empty() {
            self.suggest.clear();
            self.debouncer.cancel();
        } else {
            self.suggest.set_query(&query);
            self.debouncer.schedule();
        }
    }

    /// One event-loop tick: fire a due debounce and drain worker responses.
    pub fn tick(&mut self) {
        if self.debouncer.fire_if_due() {
            self.dispatch_suggestion_fetch();
        }

        while let Some(response) = self.fetcher.try_recv() {
            self.route_response(response);
        }
    }

    /// Fetch suggestions for the settled input text.
    pub fn dispatch_suggestion_fetch(&mut self) {
        let query = self.input_text().trim().to_string();
        if query.is_empty() {
            return;
        }
        let limit = self.config.search.max_suggestions;
        let request_id = self.fetcher.dispatch_suggestions(&query, limit);
        self.suggest.set_query(&query);
        self.suggest.track_request(request_id);
    }

    /// Fetch the "popular suggestions" variant (empty query).
    pub fn dispatch_popular_fetch(&mut self) {
        let limit = self.config.search.max_suggestions;
        let request_id = self.fetcher.dispatch_suggestions("", limit);
        self.suggest.set_query("");
        self.suggest.track_request(request_id);
    }

    /// Commit a resolved symbol (or free text): record it, close the popup,
    /// and open the analysis overlay in its loading state.
    pub fn commit_search(&mut self, query: &str) {
        let query = query.trim().to_string();
        if query.is_empty() {
            return;
        }

        self.set_input_text(&query);
        self.suggest.clear();
        self.debouncer.cancel();
        self.history.record_search(&query);

        let request_id = self.fetcher.dispatch_analysis(&query);
        self.analysis
            .begin(AnalysisSubject::Stock(query), request_id);
    }

    /// Commit a theme aggregate lookup for the typed name.
    pub fn commit_theme_search(&mut self, name: &str) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }

        self.suggest.clear();
        self.debouncer.cancel();
        self.history.record_search(&name);

        let request_id = self.fetcher.dispatch_theme(&name);
        self.analysis.begin(AnalysisSubject::Theme(name), request_id);
    }

    /// Re-dispatch the failed analysis the overlay is showing.
    pub fn retry_analysis(&mut self) {
        let Some(subject) = self.analysis.retry_subject() else {
            return;
        };
        let request_id = match &subject {
            AnalysisSubject::Stock(symbol) => self.fetcher.dispatch_analysis(symbol),
            AnalysisSubject::Theme(name) => self.fetcher.dispatch_theme(name),
        };
        self.analysis.begin(subject, request_id);
    }

    /// Route a worker response to its component, dropping stale ones so an
    /// out-of-order completion can never overwrite a newer query's results.
    pub fn route_response(&mut self, response: FetchResponse) {
        match response {
            FetchResponse::Suggestions {
                candidates,
                fallback,
                request_id,
            } => {
                if !self.suggest.accepts_response(request_id) {
                    debug!("dropping stale suggestion response {request_id}");
                    return;
                }
                let limit = self.config.search.max_suggestions;
                let ranked = ranker::rank(candidates, self.suggest.query(), limit);
                self.suggest.update_suggestions(ranked, fallback);
            }
            FetchResponse::Analysis {
                result,
                symbol,
                request_id,
            } => {
                if !self.analysis.accepts_response(request_id) {
                    debug!("dropping stale analysis response {request_id} for {symbol}");
                    return;
                }
                match result {
                    Ok(report) => self.analysis.complete_stock(report),
                    Err(e) => self.analysis.fail(e.user_message()),
                }
            }
            FetchResponse::Theme {
                result,
                name,
                request_id,
            } => {
                if !self.analysis.accepts_response(request_id) {
                    debug!("dropping stale theme response {request_id} for {name}");
                    return;
                }
                match result {
                    Ok(report) => self.analysis.complete_theme(report),
                    Err(e) => self.analysis.fail(e.user_message()),
                }
            }
        }
    }

    /// Pin the currently analyzed stock to the watchlist.
    pub fn add_analyzed_to_watchlist(&mut self) {
        use crate::analysis::AnalysisView;

        let Some(AnalysisView::Stock(report)) = self.analysis.view() else {
            return;
        };
        let report = report.clone();
        let symbol = report.symbol.trim().to_string();
        if symbol.is_empty() {
            self.notification.warn("Analysis has no symbol to pin");
            return;
        }
        if self.watchlist.add_from_report(&report) {
            self.notification.info(format!("Added {symbol} to watchlist"));
        } else {
            self.notification.info(format!("{symbol} already on watchlist"));
        }
    }
}
