use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::theme::Theme;
use crate::watchlist::WatchlistState;

/// Render the watchlist pane (the main area under the input field)
pub fn render_pane(
    state: &WatchlistState,
    theme: &Theme,
    focused: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Watchlist ")
        .border_style(Style::default().fg(border_color));

    if state.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Type to search stocks. Enter analyzes, a pins to this list.",
                Style::default().fg(theme.text_muted),
            )),
            Line::from(Span::styled(
                "  ? shows all keybindings.",
                Style::default().fg(theme.text_muted),
            )),
        ])
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("SYMBOL"),
        Cell::from("NAME"),
        Cell::from("PRICE"),
        Cell::from("CHANGE"),
        Cell::from("ADDED"),
    ])
    .style(Style::default().fg(theme.text_muted));

    let rows: Vec<Row> = state
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = focused && state.selected_index() == Some(i);
            let row_style = if selected {
                Style::default().bg(theme.selection_bg)
            } else {
                Style::default()
            };

            let price = match entry.last_price {
                Some(p) => format!("{p:.2}"),
                None => "—".to_string(),
            };
            let (change, change_style) = match entry.change_percent {
                Some(pct) => (
                    format!("{pct:+.2}%"),
                    Style::default().fg(theme.change_color(pct)),
                ),
                None => ("—".to_string(), Style::default().fg(theme.text_muted)),
            };

            Row::new(vec![
                Cell::from(Span::styled(
                    entry.symbol.clone(),
                    Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                )),
                Cell::from(Span::styled(
                    entry.name.clone().unwrap_or_default(),
                    Style::default().fg(theme.text_muted),
                )),
                Cell::from(Span::styled(price, Style::default().fg(theme.text))),
                Cell::from(Span::styled(change, change_style)),
                Cell::from(Span::styled(
                    entry.added_at.format("%Y-%m-%d").to_string(),
                    Style::default().fg(theme.text_muted),
                )),
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

#[cfg(test)]
#[path = "watchlist_render_tests.rs"]
mod watchlist_render_tests;
