//! Screen layout
//!
//! Splits the frame into the fixed-height input field, the watchlist pane,
//! and the one-line help bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

pub const INPUT_HEIGHT: u16 = 3;
pub const HELP_LINE_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub input: Rect,
    pub watchlist: Rect,
    pub help_line: Rect,
}

pub fn screen_areas(frame_area: Rect) -> ScreenAreas {
    let layout = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(HELP_LINE_HEIGHT),
    ])
    .split(frame_area);

    ScreenAreas {
        input: layout[0],
        watchlist: layout[1],
        help_line: layout[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_areas_partition_the_frame() {
        let frame = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let areas = screen_areas(frame);

        assert_eq!(areas.input.height, INPUT_HEIGHT);
        assert_eq!(areas.help_line.height, HELP_LINE_HEIGHT);
        assert_eq!(
            areas.input.height + areas.watchlist.height + areas.help_line.height,
            frame.height
        );
        assert_eq!(areas.watchlist.y, areas.input.y + areas.input.height);
    }
}
