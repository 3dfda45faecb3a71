//! Per-instance text decoration
//!
//! Styles are built straight from [`colored::Color`] codes instead of `colored::Colorize`,
//! so whether a line is decorated depends only on the owning logger's `colors` flag and
//! never on `colored::control` or the terminal the process happens to run in.

use super::log_level::LogLevel;
use colored::Color;

const RESET: &str = "\x1b[0m";

/// Foreground color with an optional background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    fg: Color,
    bg: Option<Color>,
}

impl Style {
    pub const fn fg(fg: Color) -> Self {
        Self { fg, bg: None }
    }

    #[must_use]
    pub const fn on(self, bg: Color) -> Self {
        Self {
            fg: self.fg,
            bg: Some(bg),
        }
    }

    /// Wrap `text` in the escape sequence for this style
    pub fn paint(&self, text: &str) -> String {
        match self.bg {
            Some(bg) => format!(
                "\x1b[{};{}m{}{}",
                self.fg.to_fg_str(),
                bg.to_bg_str(),
                text,
                RESET
            ),
            None => format!("\x1b[{}m{}{}", self.fg.to_fg_str(), text, RESET),
        }
    }
}

pub const TIMESTAMP: Style = Style::fg(Color::Cyan);
pub const NAMESPACE: Style = Style::fg(Color::Magenta);
pub const EVENT_ID: Style = Style::fg(Color::White).on(Color::Blue);

/// Decorates text when enabled, passes it through unchanged otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn apply(&self, style: Style, text: &str) -> String {
        if self.enabled {
            style.paint(text)
        } else {
            text.to_string()
        }
    }

    pub fn level(&self, level: LogLevel) -> String {
        self.apply(Style::fg(level.color_code()), level.tag())
    }
}
