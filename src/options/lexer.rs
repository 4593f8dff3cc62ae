//! Lexers for option strings using logos
//!
//! `align` and `flip` take keyword lists separated by whitespace or commas.
//! Dimension and rotation strings mix numbers and units; those are split with
//! [`split_numeric`] and [`numeric_prefix`].

use logos::Logos;

/// A keyword from an `align` or `flip` option
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[\s,]+")]
pub enum Keyword {
    // Horizontal alignment
    #[token("left", ignore(ascii_case))]
    Left,
    #[token("right", ignore(ascii_case))]
    Right,
    #[token("center", ignore(ascii_case))]
    Center,

    // Vertical alignment
    #[token("top", ignore(ascii_case))]
    Top,
    #[token("bottom", ignore(ascii_case))]
    Bottom,
    #[token("middle", ignore(ascii_case))]
    Middle,

    // Scaling mode
    #[token("crop", ignore(ascii_case))]
    Crop,
    #[token("meet", ignore(ascii_case))]
    Meet,

    // Flip directions
    #[token("horizontal", ignore(ascii_case))]
    Horizontal,
    #[token("vertical", ignore(ascii_case))]
    Vertical,

    /// Any other word; callers ignore it
    #[regex(r"[^\s,]+", priority = 1)]
    Other,
}

/// Lex a keyword list
pub fn keywords(input: &str) -> impl Iterator<Item = Keyword> + '_ {
    Keyword::lexer(input).filter_map(|tok| tok.ok())
}

/// A piece of a dimension string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Number(&'a str),
    Text(&'a str),
}

/// Length of the number matching `-?[0-9.]*[0-9]+[0-9.]*` at the start of `s`
fn number_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let sign = usize::from(bytes.first() == Some(&b'-'));
    let run = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .count();
    let has_digit = bytes[sign..sign + run].iter().any(u8::is_ascii_digit);
    has_digit.then_some(sign + run)
}

/// Split a string into alternating text and number segments
///
/// Numbers are the leftmost-longest runs of digits and dots containing at
/// least one digit, with an optional leading minus sign. Empty text segments
/// are not emitted.
pub fn split_numeric(input: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < input.len() {
        match number_len(&input[pos..]) {
            Some(len) => {
                if text_start < pos {
                    segments.push(Segment::Text(&input[text_start..pos]));
                }
                segments.push(Segment::Number(&input[pos..pos + len]));
                pos += len;
                text_start = pos;
            }
            None => {
                pos += input[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    if text_start < input.len() {
        segments.push(Segment::Text(&input[text_start..]));
    }
    segments
}

/// Split off the prefix matching `-?[0-9.]*`, returning `(prefix, rest)`
pub fn numeric_prefix(input: &str) -> (&str, &str) {
    let sign = usize::from(input.starts_with('-'));
    let run = input[sign..]
        .bytes()
        .take_while(|b| b.is_ascii_digit() || *b == b'.')
        .count();
    input.split_at(sign + run)
}

/// Parse the leading integer of a string, ignoring anything after it
///
/// Returns `None` when the string does not start with an optionally signed
/// digit.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let sign = usize::from(trimmed.starts_with(['-', '+']));
    let digits = trimmed[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    let value = trimmed[sign..sign + digits].parse::<i64>().ok()?;
    Some(if trimmed.starts_with('-') { -value } else { value })
}

/// Parse the longest leading float of a string
///
/// Returns `None` when no prefix is a valid number.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    (1..=trimmed.len())
        .rev()
        .filter(|end| trimmed.is_char_boundary(*end))
        .find_map(|end| {
            let candidate = &trimmed[..end];
            // `inf`/`nan` spellings are not numbers here
            if candidate.bytes().any(|b| b.is_ascii_alphabetic()) {
                return None;
            }
            candidate.parse::<f64>().ok()
        })
}
