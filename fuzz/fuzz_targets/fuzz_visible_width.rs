//! Fuzz target for visible width measurement.
//!
//! Arbitrary text, including malformed or unterminated markers, must never
//! panic, and decorating it must never change its width.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ft_report::{linkify, pad, stylize, visible_width, Style};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    url: &'a str,
    style: u8,
    width: u8,
}

fuzz_target!(|input: Input<'_>| {
    let width = visible_width(input.text);
    assert!(width <= input.text.chars().count());

    // Decoration is only width-neutral for text without its own escapes.
    if !input.text.contains('\x1b') && !input.url.contains('\x1b') && !input.url.is_empty() {
        let style = Style::ALL[input.style as usize % Style::ALL.len()];
        let wrapped = stylize(&linkify(input.text, Some(input.url)), style);
        assert_eq!(visible_width(&wrapped), width);

        let padded = pad(&wrapped, input.width as usize);
        assert_eq!(visible_width(&padded), width.max(input.width as usize));
    }
});
