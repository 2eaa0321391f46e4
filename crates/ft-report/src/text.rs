//! Styled text: hyperlink and style decoration with tracked marker width.
//!
//! [`StyledText`] records how many of its characters are markers at the
//! moment each marker is added, so its visible width never depends on
//! re-scanning the bytes. A URL that happens to contain marker-like text
//! cannot skew the count.

use crate::style::Style;
use crate::width::visible_width;

/// Opening bytes of an OSC8 hyperlink marker, followed by the URL.
pub const OSC8_PREFIX: &str = "\x1b]8;;";

/// String terminator ending an OSC8 marker.
pub const STRING_TERMINATOR: &str = "\x1b\\";

/// Text plus the count of its non-printing characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    hidden: usize,
}

impl StyledText {
    /// Unstyled text; every character is visible.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hidden: 0,
        }
    }

    /// Wrap in an OSC8 hyperlink when `url` is present.
    pub fn linkify(self, url: Option<&str>) -> Self {
        let Some(url) = url else {
            return self;
        };
        let marker_chars = 2 * (OSC8_PREFIX.chars().count() + STRING_TERMINATOR.chars().count())
            + url.chars().count();
        Self {
            text: format!(
                "{OSC8_PREFIX}{url}{STRING_TERMINATOR}{}{OSC8_PREFIX}{STRING_TERMINATOR}",
                self.text
            ),
            hidden: self.hidden + marker_chars,
        }
    }

    /// Wrap between `style` and the reset marker.
    pub fn stylize(self, style: Style) -> Self {
        let open = style.code();
        let reset = Style::Reset.code();
        Self {
            text: format!("{open}{}{reset}", self.text),
            hidden: self.hidden + open.chars().count() + reset.chars().count(),
        }
    }

    /// Append spaces until the visible width reaches `width`. Never truncates.
    pub fn pad(mut self, width: usize) -> Self {
        let missing = width.saturating_sub(self.visible_width());
        self.text.extend(std::iter::repeat(' ').take(missing));
        self
    }

    /// Append another styled span.
    pub fn push(&mut self, other: StyledText) {
        self.text.push_str(&other.text);
        self.hidden += other.hidden;
    }

    /// Characters a terminal renders.
    pub fn visible_width(&self) -> usize {
        self.text.chars().count() - self.hidden
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for StyledText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        let mut out = StyledText::default();
        for part in iter {
            out.push(part);
        }
        out
    }
}

/// Wrap `text` in a hyperlink to `url`, or return it unchanged.
pub fn linkify(text: &str, url: Option<&str>) -> String {
    StyledText::plain(text).linkify(url).into_string()
}

/// Wrap `text` in `style` followed by the reset marker.
pub fn stylize(text: &str, style: Style) -> String {
    StyledText::plain(text).stylize(style).into_string()
}

/// Pad a raw string with spaces to `width` visible columns. Never truncates.
pub fn pad(s: &str, width: usize) -> String {
    let missing = width.saturating_sub(visible_width(s));
    let mut out = String::with_capacity(s.len() + missing);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(missing));
    out
}
