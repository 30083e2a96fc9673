//! Tests for app_events

use crossterm::event::{KeyCode, KeyModifiers};

use crate::analysis::AnalysisSubject;
use crate::api::ApiError;
use crate::app::{App, Focus};
use crate::config::Config;
use crate::fetcher::{FetchResponse, spawn_worker};
use crate::test_utils::test_helpers::*;

#[test]
fn test_ctrl_c_quits_from_anywhere() {
    let mut app = test_app();
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[test]
fn test_typing_reaches_the_input_field() {
    let mut app = test_app();
    type_text(&mut app, "NV");
    assert_eq!(app.input_text(), "NV");
}

// The spec's end-to-end scenario: type "NV", pause, one NVDA suggestion
// arrives, Enter commits it and dispatches the analysis.
#[test]
fn test_end_to_end_type_pause_select_analyze() {
    let mut app = test_app();

    type_text(&mut app, "NV");
    flush_debounced_fetch(&mut app);
    inject_suggestions(&mut app, vec![nvda()]);

    assert!(app.suggest.is_visible());
    assert_eq!(app.suggest.suggestions().len(), 1);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.suggest.selected_index(), Some(0));

    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.input_text(), "NVDA");
    assert!(!app.suggest.is_visible());
    assert!(app.analysis.is_visible());
    assert_eq!(
        app.analysis.subject(),
        Some(&AnalysisSubject::Stock("NVDA".into()))
    );
}

// Keystrokes faster than the debounce interval produce exactly one fetch
// for the final settled query.
#[test]
fn test_rapid_typing_yields_single_fetch() {
    let mut config = Config::default();
    config.search.debounce_ms = 80;
    let mut app = App::new(config, spawn_worker(None));

    // Each keystroke re-arms the timer; none of these pauses long enough
    for ch in ['N', 'V', 'D', 'A'] {
        app.handle_key_event(key(KeyCode::Char(ch)));
        app.tick();
    }
    assert_eq!(app.suggest.last_request_id(), 0, "no fetch while typing");

    let deadline = std::time::Instant::now() + std::time::Duration::from_millis(500);
    while app.suggest.last_request_id() == 0 && std::time::Instant::now() < deadline {
        app.tick();
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert_eq!(
        app.suggest.last_request_id(),
        1,
        "exactly one fetch for the settled query"
    );
    assert_eq!(app.suggest.query(), "NVDA");
}

#[test]
fn test_enter_without_selection_submits_free_text() {
    let mut app = test_app();
    type_text(&mut app, "NVDA");
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(
        app.analysis.subject(),
        Some(&AnalysisSubject::Stock("NVDA".into()))
    );
}

#[test]
fn test_enter_on_empty_input_does_nothing() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.analysis.is_visible());
}

#[test]
fn test_up_returns_selection_to_free_text_state() {
    let mut app = test_app();
    type_text(&mut app, "NV");
    flush_debounced_fetch(&mut app);
    inject_suggestions(&mut app, vec![nvda()]);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.suggest.selected_index(), None);
}

#[test]
fn test_tab_accepts_suggestion_without_analyzing() {
    let mut app = test_app();
    type_text(&mut app, "NV");
    flush_debounced_fetch(&mut app);
    inject_suggestions(&mut app, vec![nvda()]);

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Tab));

    assert_eq!(app.input_text(), "NVDA");
    assert!(!app.suggest.is_visible());
    assert!(!app.analysis.is_visible());
}

#[test]
fn test_escape_closes_popup_then_leaves_input() {
    let mut app = test_app();
    type_text(&mut app, "NV");
    flush_debounced_fetch(&mut app);
    inject_suggestions(&mut app, vec![nvda()]);
    assert!(app.suggest.is_visible());

    // First Esc closes the list
    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.suggest.is_visible());
    assert_eq!(app.focus, Focus::InputField);

    // Second Esc removes focus from the field
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::WatchlistPane);
}

#[test]
fn test_help_popup_blocks_other_keys() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.visible);

    // Blocked: would otherwise type into the field
    app.handle_key_event(key(KeyCode::Char('x')));
    assert_eq!(app.input_text(), "");

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.help.visible);
}

#[test]
fn test_analysis_overlay_escape_closes() {
    let mut app = test_app();
    app.commit_search("NVDA");
    assert!(app.analysis.is_visible());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(!app.analysis.is_visible());
}

#[test]
fn test_retry_key_re_dispatches_failed_analysis() {
    let mut app = test_app();
    app.commit_search("NVDA");
    app.route_response(FetchResponse::Analysis {
        result: Err(ApiError::Status(500)),
        symbol: "NVDA".into(),
        request_id: 1,
    });
    assert!(app.analysis.error().is_some());

    app.handle_key_event(key(KeyCode::Char('r')));
    assert!(app.analysis.is_loading());
    assert!(app.analysis.error().is_none());
}

#[test]
fn test_watchlist_navigation_and_removal() {
    let mut app = test_app();
    app.commit_search("NVDA");
    app.route_response(FetchResponse::Analysis {
        result: Ok(crate::api::AnalysisReport {
            symbol: "NVDA".into(),
            ..Default::default()
        }),
        symbol: "NVDA".into(),
        request_id: 1,
    });
    app.handle_key_event(key(KeyCode::Char('a')));
    app.handle_key_event(key(KeyCode::Esc)); // close overlay
    app.handle_key_event(key(KeyCode::Esc)); // leave input field
    assert_eq!(app.focus, Focus::WatchlistPane);

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.watchlist.selected_index(), Some(0));

    app.handle_key_event(key(KeyCode::Char('d')));
    assert!(app.watchlist.is_empty());
}

#[test]
fn test_watchlist_enter_re_analyzes_entry() {
    let mut app = test_app();
    app.commit_search("NVDA");
    app.route_response(FetchResponse::Analysis {
        result: Ok(crate::api::AnalysisReport {
            symbol: "NVDA".into(),
            ..Default::default()
        }),
        symbol: "NVDA".into(),
        request_id: 1,
    });
    app.handle_key_event(key(KeyCode::Char('a')));
    app.handle_key_event(key(KeyCode::Esc));
    app.handle_key_event(key(KeyCode::Esc));

    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.analysis.is_loading());
    assert_eq!(app.focus, Focus::InputField);
    assert_eq!(
        app.analysis.subject(),
        Some(&AnalysisSubject::Stock("NVDA".into()))
    );
}

#[test]
fn test_history_popup_flow() {
    let mut app = test_app();
    app.commit_search("NVDA");
    app.handle_key_event(key(KeyCode::Esc)); // close overlay
    app.set_input_text("");

    app.handle_key_event(key_with_mods(KeyCode::Char('r'), KeyModifiers::CONTROL));
    assert!(app.history.is_visible());

    app.handle_key_event(key(KeyCode::Enter));
    assert!(!app.history.is_visible());
    assert_eq!(app.input_text(), "NVDA");
    assert!(app.analysis.is_loading());
}

#[test]
fn test_quit_from_watchlist_pane() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::WatchlistPane);

    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_q_in_input_field_types_a_character() {
    let mut app = test_app();
    app.handle_key_event(key(KeyCode::Char('q')));
    assert!(!app.should_quit());
    assert_eq!(app.input_text(), "q");
}
