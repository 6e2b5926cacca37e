//! ANSI style table and per-severity presets
//!
//! Static lookup of the formatting applied to each segment of a log line.
//! Every styled segment is bounded by a reset code (the `colored` crate
//! emits it), so terminal state never leaks across lines.

use super::severity::Severity;
use colored::{Color, Colorize};

// Palette used by the presets. The 256-color entries from the original
// scheme are expressed as their xterm RGB values.
pub const GRAY: Color = Color::TrueColor {
    r: 128,
    g: 128,
    b: 128,
};
pub const LIGHT_GRAY: Color = Color::TrueColor {
    r: 188,
    g: 188,
    b: 188,
};
pub const ORANGE: Color = Color::TrueColor {
    r: 215,
    g: 175,
    b: 0,
};
pub const GRAY_BG: Color = Color::TrueColor {
    r: 68,
    g: 68,
    b: 68,
};

/// Text attributes for one segment of a log line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            color: None,
            background: None,
            bold: false,
        }
    }

    pub const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            background: None,
            bold: false,
        }
    }

    pub const fn fg_bold(color: Color) -> Self {
        Self {
            color: Some(color),
            background: None,
            bold: true,
        }
    }

    pub const fn fg_on(color: Color, background: Color) -> Self {
        Self {
            color: Some(color),
            background: Some(background),
            bold: false,
        }
    }

    /// Render `text` with this style applied, reset-terminated.
    ///
    /// A fully plain style returns the text unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = text.normal();
        if let Some(color) = self.color {
            styled = styled.color(color);
        }
        if let Some(background) = self.background {
            styled = styled.on_color(background);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// Static per-severity formatting preset: one record per [`Severity`],
/// read-only after process start.
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    pub timestamp: Style,
    pub label: &'static str,
    pub level: Style,
    pub message: Style,
}

/// Look up the formatting preset for a severity.
pub fn config_for(severity: Severity) -> LevelConfig {
    match severity {
        Severity::Info => LevelConfig {
            timestamp: Style::fg(GRAY),
            label: "  INF  ",
            level: Style::fg(GRAY),
            message: Style::fg(GRAY),
        },
        Severity::Warn => LevelConfig {
            timestamp: Style::fg(LIGHT_GRAY),
            label: "  WRN  ",
            level: Style::fg(LIGHT_GRAY),
            message: Style::fg(LIGHT_GRAY),
        },
        Severity::Error => LevelConfig {
            timestamp: Style::plain(),
            label: "  ERR  ",
            level: Style::fg_bold(ORANGE),
            message: Style::plain(),
        },
        Severity::Fatal => LevelConfig {
            timestamp: Style::fg_on(Color::BrightWhite, GRAY_BG),
            label: " FATAL ",
            level: Style::fg_bold(Color::Red),
            message: Style::fg_on(Color::BrightWhite, GRAY_BG),
        },
    }
}
