use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::history::HistoryState;
use crate::theme::Theme;
use crate::widgets::popup;

const MAX_VISIBLE_HISTORY: usize = 10;
const POPUP_BORDER_HEIGHT: u16 = 2;

/// Render the search-history popup under the input field
pub fn render_popup(state: &HistoryState, theme: &Theme, frame: &mut Frame, input_area: Rect) {
    if !state.is_visible() {
        return;
    }
    let records = state.visible_records();
    if records.is_empty() {
        return;
    }

    let visible_count = records.len().min(MAX_VISIBLE_HISTORY);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;
    let popup_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        input_area.width.saturating_sub(2),
        popup_height,
        1,
    );
    if popup_area.height < POPUP_BORDER_HEIGHT + 1 {
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .take(MAX_VISIBLE_HISTORY)
        .enumerate()
        .map(|(i, record)| {
            let selected = state.selected_index() == Some(i);
            let row_style = if selected {
                Style::default().bg(theme.selection_bg)
            } else {
                Style::default()
            };
            let when = record.searched_at.format("%Y-%m-%d %H:%M");
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<24}", record.query),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(when.to_string(), Style::default().fg(theme.text_muted)),
            ]))
            .style(row_style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Recent searches ")
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.popup_bg)),
    );

    popup::clear_area(frame, popup_area);
    frame.render_widget(list, popup_area);
}

#[cfg(test)]
#[path = "history_render_tests.rs"]
mod history_render_tests;
