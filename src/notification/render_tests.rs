use ratatui::{Terminal, backend::TestBackend};

use super::*;

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

#[test]
fn test_active_notification_is_rendered() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = NotificationState::new();
    let theme = Theme::dark();
    state.info("Added NVDA to watchlist");

    terminal
        .draw(|frame| render_notification(frame, &mut state, &theme))
        .unwrap();

    assert!(buffer_text(&terminal).contains("Added NVDA to watchlist"));
}

#[test]
fn test_empty_state_renders_nothing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut state = NotificationState::new();
    let theme = Theme::dark();

    terminal
        .draw(|frame| render_notification(frame, &mut state, &theme))
        .unwrap();

    assert_eq!(buffer_text(&terminal).trim(), "");
}
