use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, Borders},
};

use super::state::{App, Focus};
use crate::layout::screen_areas;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let areas = screen_areas(frame.area());

        crate::watchlist::watchlist_render::render_pane(
            &self.watchlist,
            &self.theme,
            self.focus == Focus::WatchlistPane,
            frame,
            areas.watchlist,
        );

        self.render_input_field(frame, areas.input);

        crate::help::help_line_render::render_line(self, frame, areas.help_line);

        if self.focus == Focus::InputField && !self.analysis.is_visible() {
            if self.history.is_visible() {
                crate::history::history_render::render_popup(
                    &self.history,
                    &self.theme,
                    frame,
                    areas.input,
                );
            } else {
                crate::suggest::suggest_render::render_popup(
                    &self.suggest,
                    &self.theme,
                    frame,
                    areas.input,
                );
            }
        }

        crate::analysis::analysis_render::render_overlay(&self.analysis, &self.theme, frame);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(&self.theme, frame);
        }

        render_notification(frame, &mut self.notification, &self.theme);
    }

    fn render_input_field(&mut self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let border_color = if self.focus == Focus::InputField {
            self.theme.border_focused
        } else {
            self.theme.border
        };
        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input, area);
    }
}
