//! Suggestion popup rendering
//!
//! Renders the ranked suggestion list as a dropdown under the input field.
//! Pure function of the suggestion state: an empty list renders nothing.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use crate::suggest::{SuggestState, Suggestion};
use crate::theme::Theme;
use crate::widgets::popup;

// Popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 2;
const POPUP_OFFSET_X: u16 = 1;
const NAME_COLUMN_MAX: usize = 28;
const QUOTE_COLUMN_WIDTH: usize = 18;

/// Render the suggestion popup under the input field
pub fn render_popup(
    state: &SuggestState,
    theme: &Theme,
    frame: &mut Frame,
    input_area: Rect,
) {
    let suggestions = state.suggestions();
    if !state.is_visible() {
        return;
    }

    let visible_count = suggestions.len().min(MAX_VISIBLE_SUGGESTIONS);
    let popup_height = (visible_count as u16) + POPUP_BORDER_HEIGHT;

    let symbol_width = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|s| s.symbol.width())
        .max()
        .unwrap_or(4);
    let name_width = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|s| display_name(s).width())
        .max()
        .unwrap_or(0);

    let content_width = symbol_width + 2 + name_width + 2 + QUOTE_COLUMN_WIDTH;
    let popup_width = (content_width as u16) + POPUP_PADDING + 2;

    let popup_area =
        popup::popup_below_anchor(input_area, frame.area(), popup_width, popup_height, POPUP_OFFSET_X);
    if popup_area.height < POPUP_BORDER_HEIGHT + 1 {
        return;
    }

    let items: Vec<ListItem> = suggestions
        .iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .enumerate()
        .map(|(i, s)| {
            let selected = state.selected_index() == Some(i);
            suggestion_row(s, state.query(), theme, selected, symbol_width, name_width)
        })
        .collect();

    let title = if state.is_fallback() {
        " Suggestions (offline) "
    } else {
        " Suggestions "
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.popup_bg)),
    );

    popup::clear_area(frame, popup_area);
    frame.render_widget(list, popup_area);
}

fn display_name(s: &Suggestion) -> String {
    let mut label = s.name.clone();
    if label.chars().count() > NAME_COLUMN_MAX {
        label = label.chars().take(NAME_COLUMN_MAX - 1).collect();
        label.push('…');
    }
    if !s.sector.is_empty() {
        label.push_str("  ");
        label.push_str(&s.sector);
    }
    label
}

/// One popup row: emphasized symbol match, name + sector, quote column.
fn suggestion_row<'a>(
    s: &'a Suggestion,
    query: &str,
    theme: &Theme,
    selected: bool,
    symbol_width: usize,
    name_width: usize,
) -> ListItem<'a> {
    let row_style = if selected {
        Style::default().bg(theme.selection_bg)
    } else {
        Style::default()
    };

    let mut spans = symbol_spans(&s.symbol, query, theme);
    let pad = symbol_width.saturating_sub(s.symbol.width()) + 2;
    spans.push(Span::raw(" ".repeat(pad)));

    let name = display_name(s);
    let name_pad = name_width.saturating_sub(name.width()) + 2;
    spans.push(Span::styled(name, Style::default().fg(theme.text_muted)));
    spans.push(Span::raw(" ".repeat(name_pad)));

    match (s.current_price, s.change_percent()) {
        (Some(price), Some(pct)) => {
            spans.push(Span::styled(
                format!("{price:>9.2} "),
                Style::default().fg(theme.text),
            ));
            spans.push(Span::styled(
                format!("{pct:>+6.2}%"),
                Style::default().fg(theme.change_color(pct)),
            ));
        }
        (Some(price), None) => {
            spans.push(Span::styled(
                format!("{price:>9.2}"),
                Style::default().fg(theme.text),
            ));
        }
        _ => {
            spans.push(Span::styled("    —", Style::default().fg(theme.text_muted)));
        }
    }

    ListItem::new(Line::from(spans)).style(row_style)
}

/// Split the symbol into spans with the matched substring emphasized.
fn symbol_spans<'a>(symbol: &'a str, query: &str, theme: &Theme) -> Vec<Span<'a>> {
    let base = Style::default().fg(theme.text).add_modifier(Modifier::BOLD);
    let emphasized = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let query = query.trim();
    if query.is_empty() {
        return vec![Span::styled(symbol, base)];
    }

    match symbol.to_lowercase().find(&query.to_lowercase()) {
        // Only split on char boundaries; symbols are ASCII in practice but
        // the server is not trusted to guarantee that
        Some(start)
            if symbol.is_char_boundary(start) && symbol.is_char_boundary(start + query.len()) =>
        {
            let end = start + query.len();
            vec![
                Span::styled(&symbol[..start], base),
                Span::styled(&symbol[start..end], emphasized),
                Span::styled(&symbol[end..], base),
            ]
        }
        _ => vec![Span::styled(symbol, base)],
    }
}

#[cfg(test)]
#[path = "suggest_render_tests.rs"]
mod suggest_render_tests;
