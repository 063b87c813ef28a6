//! Line-based unified-diff parser.
//!
//! Handles both plain `---`/`+++` diffs and `git diff` output; the git
//! preamble lines (`diff --git`, `index`, modes, renames) carry no hunk
//! content and are skipped.

use std::iter::{Enumerate, Peekable};
use std::str::Lines;

use thiserror::Error;

use super::types::{FileDiff, Hunk};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: hunk header before any file header: {header:?}")]
    OrphanHunk { line: usize, header: String },

    #[error("line {line}: malformed hunk header: {header:?}")]
    MalformedHunkHeader { line: usize, header: String },
}

/// Parse a whole unified-diff document into per-file records.
///
/// Empty input parses to an empty vec.
pub fn parse(input: &str) -> Result<Vec<FileDiff>, ParseError> {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut lines = input.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        if let Some(name) = line.strip_prefix("--- ") {
            // Anything after a tab is a timestamp.
            let name = name.split('\t').next().unwrap_or(name);
            files.push(FileDiff {
                orig_name: name.to_string(),
                hunks: Vec::new(),
            });
        } else if line.starts_with("@@") {
            let (old_count, new_count) =
                parse_hunk_header(line).ok_or_else(|| ParseError::MalformedHunkHeader {
                    line: idx + 1,
                    header: line.to_string(),
                })?;
            let file = files.last_mut().ok_or_else(|| ParseError::OrphanHunk {
                line: idx + 1,
                header: line.to_string(),
            })?;
            let body = collect_hunk_body(&mut lines, old_count, new_count);
            file.hunks.push(Hunk {
                header: line.to_string(),
                body,
            });
        }
        // "+++ " headers and git preamble lines carry no content.
    }

    Ok(files)
}

/// Consume hunk body lines while either side's line count from the `@@`
/// header is outstanding. The counts are what disambiguate a removed line
/// that itself begins with `---` from the next file header.
fn collect_hunk_body(
    lines: &mut Peekable<Enumerate<Lines<'_>>>,
    mut old_left: i64,
    mut new_left: i64,
) -> String {
    let mut body = String::new();

    while old_left > 0 || new_left > 0 {
        let Some(&(_, line)) = lines.peek() else {
            break;
        };
        if line.starts_with("@@") {
            break;
        }
        match line.as_bytes().first() {
            Some(b'-') => old_left -= 1,
            Some(b'+') => new_left -= 1,
            Some(b'\\') => {}
            // An empty line is a context line with its trailing
            // whitespace stripped somewhere in transit.
            Some(b' ') | None => {
                old_left -= 1;
                new_left -= 1;
            }
            Some(_) => {}
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(line);
        lines.next();
    }

    // A no-newline marker on the hunk's last line sits after the counts
    // are exhausted; pick it up here.
    while let Some(&(_, line)) = lines.peek() {
        if !line.starts_with('\\') {
            break;
        }
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(line);
        lines.next();
    }

    body
}

/// Parse `@@ -start[,count] +start[,count] @@`, returning
/// (old_count, new_count). An omitted count means 1.
fn parse_hunk_header(header: &str) -> Option<(i64, i64)> {
    let header = header.strip_prefix("@@")?;
    let end = header.find("@@")?;
    let range = header[..end].trim();
    let parts: Vec<&str> = range.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let old_count = parse_range_count(parts[0].strip_prefix('-')?)?;
    let new_count = parse_range_count(parts[1].strip_prefix('+')?)?;
    Some((old_count, new_count))
}

fn parse_range_count(range: &str) -> Option<i64> {
    match range.split_once(',') {
        Some((start, count)) => {
            start.parse::<i64>().ok()?;
            count.parse::<i64>().ok()
        }
        None => {
            range.parse::<i64>().ok()?;
            Some(1)
        }
    }
}
