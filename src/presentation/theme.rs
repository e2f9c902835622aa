//! Design tokens for funcsync output.
//!
//! Only 5 semantic colors; all icons come from this module.

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "📦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const ARROW: &str = "[>]";
    pub const DEPLOY: &str = "[DEPLOY]";
}

/// Semantic icon slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Deploy,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Warning, true) => icons::WARNING,
            (Icon::Progress, true) => icons::PROGRESS,
            (Icon::Pending, true) => icons::PENDING,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Deploy, true) => icons::DEPLOY,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Warning, false) => icons_ascii::WARNING,
            (Icon::Progress, false) => icons_ascii::PROGRESS,
            (Icon::Pending, false) => icons_ascii::PENDING,
            (Icon::Arrow, false) => icons_ascii::ARROW,
            (Icon::Deploy, false) => icons_ascii::DEPLOY,
        }
    }

    /// Color the icon is painted with
    pub fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Arrow => colors::WARNING,
            Icon::Progress | Icon::Deploy => colors::INFO,
            Icon::Pending => colors::DIM,
        }
    }
}

/// Resolved output style for one process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    /// No color, ASCII icons (logs, CI, tests)
    pub const PLAIN: Style = Style {
        color: false,
        unicode: false,
    };

    pub fn icon(&self, icon: Icon) -> String {
        self.paint(icon.glyph(self.unicode), icon.color())
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, colors::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_has_no_escape_codes() {
        let style = Style::PLAIN;
        assert_eq!(style.icon(Icon::Success), "[OK]");
        assert_eq!(style.paint("done", colors::SUCCESS), "done");
    }

    #[test]
    fn colored_style_wraps_text() {
        let style = Style {
            color: true,
            unicode: true,
        };
        let painted = style.icon(Icon::Error);
        assert!(painted.contains("✗"));
        assert!(painted.contains('\u{1b}'));
    }
}
