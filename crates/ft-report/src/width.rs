//! Visible width of strings carrying style and hyperlink markers.
//!
//! A single left-to-right scan classifies every position as printable text,
//! part of a style marker, or part of an OSC8 hyperlink marker (including
//! the URL it carries). Only printable characters count toward the width.

use crate::style::{Style, ESC};
use crate::text::{OSC8_PREFIX, STRING_TERMINATOR};

/// One classified piece of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A character the terminal renders.
    Text(char),
    /// A known SGR marker.
    Style(Style),
    /// An OSC8 marker; an empty URL closes the current link.
    Link(&'a str),
}

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let ch = self.rest.chars().next()?;
        if ch == ESC {
            if let Some(style) = Style::match_prefix(self.rest) {
                self.rest = &self.rest[style.code().len()..];
                return Some(Token::Style(style));
            }
            if let Some(after) = self.rest.strip_prefix(OSC8_PREFIX) {
                // An unterminated marker swallows the remainder, as a terminal would.
                let (url, rest) = match after.find(STRING_TERMINATOR) {
                    Some(end) => (&after[..end], &after[end + STRING_TERMINATOR.len()..]),
                    None => (after, ""),
                };
                self.rest = rest;
                return Some(Token::Link(url));
            }
        }
        self.rest = &self.rest[ch.len_utf8()..];
        Some(Token::Text(ch))
    }
}

/// Number of characters a terminal renders for `s`.
///
/// Strings without markers return their character count.
pub fn visible_width(s: &str) -> usize {
    Tokens::new(s)
        .filter(|token| matches!(token, Token::Text(_)))
        .count()
}

/// The printable content of `s` with every marker removed.
pub fn strip_markers(s: &str) -> String {
    Tokens::new(s)
        .filter_map(|token| match token {
            Token::Text(ch) => Some(ch),
            _ => None,
        })
        .collect()
}
