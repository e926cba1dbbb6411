use ratatui::style::Color;

use crate::types::Theme;

/// UI colors for one display mode.
#[derive(Clone, Copy, Debug)]
pub struct Styles {
    /// Screen background
    pub background: Color,
    /// Normal text
    pub text: Color,
    /// Borders and section titles
    pub secondary: Color,
    /// Headings and counts
    pub accent: Color,
    /// Selection marker/border
    pub highlight: Color,
    /// Dimmed/inactive text
    pub dim: Color,
    /// Alerts in the status line
    pub warn: Color,
    /// Branding badge
    pub primary: Color,
}

impl Styles {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(0x1e, 0x1e, 0x24),
                text: Color::White,
                secondary: Color::Cyan,
                accent: Color::LightBlue,
                highlight: Color::LightGreen,
                dim: Color::DarkGray,
                warn: Color::Yellow,
                primary: Color::Magenta,
            },
            Theme::Light => Self {
                background: Color::Rgb(0xf4, 0xf4, 0xf6),
                text: Color::Black,
                secondary: Color::Rgb(0x00, 0x6d, 0x77),
                accent: Color::Blue,
                highlight: Color::Rgb(0x1b, 0x7f, 0x3b),
                dim: Color::Gray,
                warn: Color::Rgb(0xb3, 0x5c, 0x00),
                primary: Color::Magenta,
            },
        }
    }
}
