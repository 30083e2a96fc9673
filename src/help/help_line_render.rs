//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::app::{App, Focus};

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help_text = if app.analysis.is_visible() {
        if app.analysis.error().is_some() {
            " r: Retry | Esc: Close"
        } else {
            " a: Add to Watchlist | Esc: Close"
        }
    } else if app.focus == Focus::InputField {
        if app.input_text().is_empty() {
            " F1: Help | Ctrl+P: Popular | Ctrl+R: History | Esc: Watchlist"
        } else {
            " F1: Help | ↓/↑: Suggestions | Enter: Analyze | Ctrl+T: Theme | Ctrl+R: History"
        }
    } else {
        " F1/?: Help | ↓/↑: Select | Enter: Analyze | d: Remove | /: Search | q: Quit"
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(app.theme.text_muted));

    frame.render_widget(help, area);
}
