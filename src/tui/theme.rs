use ratatui::style::Color;

use crate::config::ThemeKind;

pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub foreground: Color,
    pub border: Color,
}

impl Theme {
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Default => Self::default_theme(),
            ThemeKind::Dark => Self::dark(),
        }
    }

    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Gray,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::LightBlue,
            foreground: Color::White,
            border: Color::DarkGray,
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: Color::Rgb(100, 200, 255),
            secondary: Color::Rgb(140, 140, 160),
            success: Color::Rgb(100, 255, 100),
            warning: Color::Rgb(255, 200, 100),
            error: Color::Rgb(255, 100, 100),
            info: Color::Rgb(150, 200, 255),
            foreground: Color::Rgb(220, 220, 230),
            border: Color::Rgb(60, 60, 80),
        }
    }
}
