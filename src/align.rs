//! Side-by-side alignment of a hunk's prefixed lines.
//!
//! Removed and added runs grow their own column independently; a context
//! line is a sync point that pads the shorter column before landing in
//! both. No line-level matching is attempted.

use std::fmt::Write;

use maud::Escaper;

/// One table cell in the aligned output. The carried text is already
/// HTML-escaped, so the renderer splices it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Removed(String),
    Added(String),
    Context(String),
    Empty,
}

/// A hunk line after marker classification.
enum DiffLine {
    Removed(String),
    Added(String),
    Context(String),
    Other,
}

impl DiffLine {
    /// Escape the raw line, then read the first character of the escaped
    /// string as the marker. The order matters and is kept on purpose:
    /// no escape sequence starts with `-`, `+`, or space, so markers
    /// survive, while a marker-less line whose first character escapes
    /// (e.g. `<`) classifies from `&` and is dropped as Other.
    fn classify(raw: &str) -> Self {
        let escaped = escape(raw);
        let mut chars = escaped.chars();
        match chars.next() {
            None => Self::Context(String::new()),
            Some('-') => Self::Removed(chars.as_str().to_string()),
            Some('+') => Self::Added(chars.as_str().to_string()),
            Some(' ') => Self::Context(chars.as_str().to_string()),
            Some(_) => Self::Other,
        }
    }
}

/// HTML-escape a raw line.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    // Writing into an Escaper over a String cannot fail.
    let _ = write!(Escaper::new(&mut out), "{raw}");
    out
}

/// Transform one hunk body into two equal-length cell columns
/// (left = removed/context, right = added/context).
pub fn align_hunk(body: &str) -> (Vec<Cell>, Vec<Cell>) {
    let mut left = Vec::new();
    let mut right = Vec::new();

    for raw in body.lines() {
        match DiffLine::classify(raw) {
            DiffLine::Removed(text) => left.push(Cell::Removed(text)),
            DiffLine::Added(text) => right.push(Cell::Added(text)),
            DiffLine::Context(text) => {
                equalize(&mut left, &mut right);
                left.push(Cell::Context(text.clone()));
                right.push(Cell::Context(text));
            }
            DiffLine::Other => {}
        }
    }

    equalize(&mut left, &mut right);
    (left, right)
}

/// Pad the shorter column with empty placeholder cells.
fn equalize(left: &mut Vec<Cell>, right: &mut Vec<Cell>) {
    while left.len() < right.len() {
        left.push(Cell::Empty);
    }
    while right.len() < left.len() {
        right.push(Cell::Empty);
    }
}
