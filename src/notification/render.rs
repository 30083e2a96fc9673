use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{NotificationLevel, NotificationState};
use crate::theme::Theme;
use crate::widgets::popup;

const NOTIFICATION_HEIGHT: u16 = 3;
const NOTIFICATION_MARGIN: u16 = 1;

/// Render the current notification in the bottom-right corner
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState, theme: &Theme) {
    let Some((message, level)) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let width = (message.width() as u16 + 4).min(frame_area.width);
    let area = Rect {
        x: frame_area.width.saturating_sub(width + NOTIFICATION_MARGIN),
        y: frame_area
            .height
            .saturating_sub(NOTIFICATION_HEIGHT + NOTIFICATION_MARGIN),
        width,
        height: NOTIFICATION_HEIGHT.min(frame_area.height),
    };

    let color = match level {
        NotificationLevel::Info => theme.accent,
        NotificationLevel::Warning => theme.warning,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(theme.text),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme.popup_bg)),
    );

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
