//! Analysis overlay rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::analysis::{AnalysisState, AnalysisSubject, AnalysisView};
use crate::api::{AnalysisReport, ThemeReport};
use crate::theme::Theme;
use crate::widgets::popup;

const OVERLAY_MARGIN_X: u16 = 4;
const OVERLAY_MARGIN_Y: u16 = 2;
const CONFIDENCE_CELLS: usize = 10;

/// Render the full-screen overlay (loading, report, or error panel)
pub fn render_overlay(state: &AnalysisState, theme: &Theme, frame: &mut Frame) {
    if !state.is_visible() {
        return;
    }

    let area = popup::inset_rect(frame.area(), OVERLAY_MARGIN_X, OVERLAY_MARGIN_Y);
    if area.width < 20 || area.height < 6 {
        return;
    }

    let title = match state.subject() {
        Some(AnalysisSubject::Stock(symbol)) => format!(" Analysis — {symbol} "),
        Some(AnalysisSubject::Theme(name)) => format!(" Theme — {name} "),
        None => " Analysis ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.popup_bg));
    let inner = block.inner(area);

    popup::clear_area(frame, area);
    frame.render_widget(block, area);

    if let Some(message) = state.error() {
        render_error_panel(message, theme, frame, inner);
        return;
    }

    if state.is_loading() {
        let loading = Paragraph::new(Line::from(Span::styled(
            "Fetching analysis…",
            Style::default().fg(theme.text_muted),
        )));
        frame.render_widget(loading, popup::inset_rect(inner, 2, 1));
        return;
    }

    match state.view() {
        Some(AnalysisView::Stock(report)) => {
            render_report(report, theme, frame, popup::inset_rect(inner, 2, 1));
        }
        Some(AnalysisView::Theme(report)) => {
            render_theme(report, theme, frame, popup::inset_rect(inner, 2, 1));
        }
        None => {}
    }
}

/// Inline error panel with the retry affordance
fn render_error_panel(message: &str, theme: &Theme, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Analysis failed",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(Span::styled(
            "r retry   Esc close",
            Style::default().fg(theme.text_muted),
        )),
    ];

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(panel, popup::inset_rect(area, 2, 1));
}

fn render_report(report: &AnalysisReport, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    let display_name = report.name.as_deref().unwrap_or(&report.symbol);
    lines.push(Line::from(Span::styled(
        display_name.to_string(),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let mut quote_spans = vec![Span::styled(
        format!("Price  {}", fmt_price(report.current_price)),
        Style::default().fg(theme.text),
    )];
    if let Some(pct) = report.effective_change_percent() {
        quote_spans.push(Span::raw("   "));
        quote_spans.push(Span::styled(
            format!("{pct:+.2}%"),
            Style::default().fg(theme.change_color(pct)),
        ));
    }
    lines.push(Line::from(quote_spans));

    lines.push(labelled_line(
        "Recommendation",
        report.recommendation.as_deref(),
        theme.accent,
        theme,
    ));
    lines.push(Line::from(vec![
        Span::styled("Confidence     ", Style::default().fg(theme.text_muted)),
        Span::styled(
            confidence_bar(report.confidence),
            Style::default().fg(theme.accent),
        ),
    ]));
    lines.push(labelled_line("Risk", report.risk.as_deref(), theme.warning, theme));
    lines.push(Line::from(""));

    if let Some(summary) = &report.summary {
        lines.push(Line::from(Span::styled(
            summary.clone(),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(""));
    }

    for headline in &report.headlines {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(theme.text_muted)),
            Span::styled(headline.clone(), Style::default().fg(theme.text)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "a add to watchlist   Esc close",
        Style::default().fg(theme.text_muted),
    )));

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

fn render_theme(report: &ThemeReport, theme: &Theme, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();

    if let Some(description) = &report.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(theme.text),
        )));
        lines.push(Line::from(""));
    }

    if let Some(avg) = report.average_change {
        lines.push(Line::from(vec![
            Span::styled("Average change  ", Style::default().fg(theme.text_muted)),
            Span::styled(
                format!("{avg:+.2}%"),
                Style::default().fg(theme.change_color(avg)),
            ),
        ]));
        lines.push(Line::from(""));
    }

    for member in &report.members {
        let mut spans = vec![Span::styled(
            format!("{:<8}", member.symbol),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )];
        match member.change_percent {
            Some(pct) => spans.push(Span::styled(
                format!("{pct:+.2}%"),
                Style::default().fg(theme.change_color(pct)),
            )),
            None => spans.push(Span::styled("—", Style::default().fg(theme.text_muted))),
        }
        lines.push(Line::from(spans));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(body, area);
}

fn labelled_line<'a>(
    label: &'a str,
    value: Option<&'a str>,
    value_color: ratatui::style::Color,
    theme: &Theme,
) -> Line<'a> {
    let padded = format!("{label:<15}");
    match value {
        Some(v) => Line::from(vec![
            Span::styled(padded, Style::default().fg(theme.text_muted)),
            Span::styled(v, Style::default().fg(value_color).add_modifier(Modifier::BOLD)),
        ]),
        None => Line::from(vec![
            Span::styled(padded, Style::default().fg(theme.text_muted)),
            Span::styled("—", Style::default().fg(theme.text_muted)),
        ]),
    }
}

fn fmt_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{p:.2}"),
        None => "—".to_string(),
    }
}

/// Textual confidence gauge; accepts either a 0..1 fraction or a 0..100
/// percentage, since the server uses both over time.
fn confidence_bar(confidence: Option<f64>) -> String {
    let Some(raw) = confidence else {
        return "—".to_string();
    };
    let fraction = if raw > 1.0 { raw / 100.0 } else { raw };
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * CONFIDENCE_CELLS as f64).round() as usize;

    let mut bar = String::new();
    for i in 0..CONFIDENCE_CELLS {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar.push_str(&format!("  {:.0}%", fraction * 100.0));
    bar
}

#[cfg(test)]
#[path = "analysis_render_tests.rs"]
mod analysis_render_tests;
