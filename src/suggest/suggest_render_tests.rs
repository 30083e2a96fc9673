use ratatui::{Terminal, backend::TestBackend, layout::Rect};

use super::*;
use crate::suggest::SuggestState;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn input_area() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 3,
    }
}

fn nvda() -> Suggestion {
    let mut s = Suggestion::new("NVDA", "NVIDIA Corporation", "Technology");
    s.current_price = Some(131.20);
    s.previous_close = Some(128.70);
    s
}

#[test]
fn test_popup_renders_symbol_name_and_sector() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = SuggestState::new();
    state.set_query("NV");
    state.update_suggestions(vec![nvda()], false);
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_popup(&state, &theme, frame, input_area()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("NVDA"));
    assert!(text.contains("NVIDIA Corporation"));
    assert!(text.contains("Technology"));
    assert!(text.contains("131.20"));
    assert!(text.contains("+1.94%"));
}

#[test]
fn test_empty_list_renders_nothing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let state = SuggestState::new();
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_popup(&state, &theme, frame, input_area()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert_eq!(text.trim(), "", "no popup chrome for an empty list");
}

#[test]
fn test_hidden_state_renders_nothing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = SuggestState::new();
    state.update_suggestions(vec![nvda()], false);
    state.hide();
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_popup(&state, &theme, frame, input_area()))
        .unwrap();

    assert_eq!(buffer_text(&terminal).trim(), "");
}

#[test]
fn test_fallback_list_is_labelled_offline() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = SuggestState::new();
    state.update_suggestions(vec![nvda()], true);
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_popup(&state, &theme, frame, input_area()))
        .unwrap();

    assert!(buffer_text(&terminal).contains("Suggestions (offline)"));
}

#[test]
fn test_missing_prices_render_placeholder() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = SuggestState::new();
    state.update_suggestions(
        vec![Suggestion::new("MYST", "Mystery Corp", "Unknown")],
        false,
    );
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_popup(&state, &theme, frame, input_area()))
        .unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("MYST"));
    assert!(text.contains("—"));
}

#[test]
fn test_symbol_spans_split_on_match() {
    let theme = Theme::dark();
    let spans = symbol_spans("NVDA", "vd", &theme);
    let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(parts, vec!["N", "VD", "A"]);
}

#[test]
fn test_symbol_spans_no_match_is_single_span() {
    let theme = Theme::dark();
    let spans = symbol_spans("NVDA", "xyz", &theme);
    assert_eq!(spans.len(), 1);
}
