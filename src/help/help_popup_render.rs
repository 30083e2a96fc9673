//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::HELP_ENTRIES;
use crate::theme::Theme;
use crate::widgets::popup;

const POPUP_WIDTH: u16 = 70;

/// Render the centered help popup
pub fn render_popup(theme: &Theme, frame: &mut Frame) {
    let height = HELP_ENTRIES.len() as u16 + 4;
    let area = popup::centered_popup(frame.area(), POPUP_WIDTH, height);

    let mut lines = vec![Line::from("")];
    for (keys, action) in HELP_ENTRIES {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {keys:<12}"),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }

    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keybindings ")
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.popup_bg)),
    );

    popup::clear_area(frame, area);
    frame.render_widget(popup, area);
}
