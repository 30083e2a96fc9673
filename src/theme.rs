//! Color theme for the terminal UI
//!
//! Dark and light variants with consistent semantic colors for financial
//! data (gains green, losses red), selected from the config's `ui.theme`.

use ratatui::style::Color;

use crate::config::ThemePreference;

/// Theme colors for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub highlight: Color,
    pub selection_bg: Color,
    pub gain: Color,
    pub loss: Color,
    pub warning: Color,
    pub error: Color,
    pub popup_bg: Color,
}

impl Theme {
    /// Dark theme, the default for terminal use
    pub fn dark() -> Self {
        Theme {
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            accent: Color::Cyan,
            highlight: Color::Yellow,
            selection_bg: Color::Rgb(40, 60, 80),
            gain: Color::Green,
            loss: Color::Red,
            warning: Color::Yellow,
            error: Color::LightRed,
            popup_bg: Color::Rgb(20, 24, 30),
        }
    }

    /// Light theme for bright terminal backgrounds
    pub fn light() -> Self {
        Theme {
            text: Color::Black,
            text_muted: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Blue,
            accent: Color::Blue,
            highlight: Color::Magenta,
            selection_bg: Color::Rgb(200, 220, 240),
            gain: Color::Rgb(0, 120, 0),
            loss: Color::Rgb(160, 0, 0),
            warning: Color::Rgb(150, 110, 0),
            error: Color::Red,
            popup_bg: Color::Rgb(235, 238, 242),
        }
    }

    pub fn from_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Self::dark(),
            ThemePreference::Light => Self::light(),
        }
    }

    /// Color for a percent-change value (gain, loss, or neutral)
    pub fn change_color(&self, change_pct: f64) -> Color {
        if change_pct > 0.0 {
            self.gain
        } else if change_pct < 0.0 {
            self.loss
        } else {
            self.text_muted
        }
    }
}
