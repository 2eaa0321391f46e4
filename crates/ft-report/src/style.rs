//! SGR style markers.
//!
//! The report only ever emits these five sequences. Anything else is out of
//! contract for width measurement.

/// Escape byte that starts every control sequence.
pub const ESC: char = '\x1b';

/// A named SGR style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Reset,
    Bold,
    Underline,
    Red,
    Blue,
}

impl Style {
    /// Every known style, in lookup order.
    pub const ALL: [Style; 5] = [
        Style::Reset,
        Style::Bold,
        Style::Underline,
        Style::Red,
        Style::Blue,
    ];

    /// Literal control sequence for this style.
    pub const fn code(&self) -> &'static str {
        match self {
            Style::Reset => "\x1b[0m",
            Style::Bold => "\x1b[1m",
            Style::Underline => "\x1b[4m",
            Style::Red => "\x1b[31m",
            Style::Blue => "\x1b[34m",
        }
    }

    /// The style whose marker starts `s`, if any.
    pub fn match_prefix(s: &str) -> Option<Style> {
        Self::ALL.into_iter().find(|style| s.starts_with(style.code()))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Style::Reset => write!(f, "reset"),
            Style::Bold => write!(f, "bold"),
            Style::Underline => write!(f, "underline"),
            Style::Red => write!(f, "red"),
            Style::Blue => write!(f, "blue"),
        }
    }
}
