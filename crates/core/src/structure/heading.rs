//! Heading detection over assembled lines.
//!
//! A heading candidate is a line whose cleaned text is a dotted-numeric
//! identifier optionally followed by a title, on a line prominent enough
//! (font size and bold ratio) to be a structural marker. Titles may continue
//! onto following prominent lines. Detection runs over the unfiltered line
//! sequence; noise filtering applies to body accumulation only.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::layout::{ExtractParams, Line};

/// Dotted-numeric heading shape: one or more dot-separated non-negative
/// integers, optionally followed by whitespace and a non-blank remainder.
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)(?:\s+(.*\S))?$").unwrap());

/// A detected structural marker.
///
/// `line_span` counts every source line consumed while reading the
/// identifier and title, interior blank lines included.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub identifier: String,
    pub title: String,
    pub start_line: usize,
    pub line_span: usize,
}

/// Splits heading-shaped text into its identifier and title remainder.
pub(crate) fn heading_parts(text: &str) -> Option<(&str, &str)> {
    let caps = HEADING_RE.captures(text)?;
    let identifier = caps.get(1)?.as_str();
    let remainder = caps.get(2).map_or("", |m| m.as_str());
    Some((identifier, remainder))
}

pub(crate) fn is_heading_shaped(text: &str) -> bool {
    HEADING_RE.is_match(text)
}

fn is_prominent(line: &Line, params: &ExtractParams) -> bool {
    line.max_font_size() >= params.heading_min_font
        && line.bold_ratio() >= params.heading_min_bold
}

/// Peek-without-consume view over the line sequence. The scan commits a
/// position only when a heading is emitted or a candidate is rejected.
struct LineCursor<'a> {
    lines: &'a [Line],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn peek(&self, offset: usize) -> Option<&'a Line> {
        self.lines.get(self.pos + offset)
    }

    fn advance(&mut self, count: usize) {
        self.pos += count;
    }
}

/// Scans the line sequence in order and returns the detected headings.
///
/// A candidate whose remainder is empty gathers its title from following
/// prominent lines, stopping at the first line that is not prominent or that
/// is itself heading-shaped (the latter is not consumed). A bare dotless
/// identifier with no resolvable title is discarded as noise (e.g. a stray
/// page number). There is no backtracking once a heading is emitted.
pub fn detect_headings(lines: &[Line], params: &ExtractParams) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut cursor = LineCursor { lines, pos: 0 };

    while let Some(line) = cursor.peek(0) {
        let text = line.cleaned_text(params.merge_gap);
        let Some((identifier, remainder)) = heading_parts(&text) else {
            cursor.advance(1);
            continue;
        };
        if !is_prominent(line, params) {
            cursor.advance(1);
            continue;
        }

        let mut title = remainder.trim().to_string();
        let mut consumed = 1;
        if title.is_empty() {
            let mut parts: Vec<String> = Vec::new();
            let mut offset = 1;
            while let Some(candidate) = cursor.peek(offset) {
                let candidate_text = candidate.cleaned_text(params.merge_gap);
                if candidate_text.is_empty() {
                    consumed += 1;
                    offset += 1;
                    continue;
                }
                if !is_prominent(candidate, params) {
                    break;
                }
                if is_heading_shaped(&candidate_text) {
                    break;
                }
                parts.push(candidate_text);
                consumed += 1;
                offset += 1;
            }
            title = parts.join(" ").trim().to_string();
        }

        if title.is_empty() && !identifier.contains('.') {
            cursor.advance(consumed);
            continue;
        }

        headings.push(Heading {
            identifier: identifier.to_string(),
            title,
            start_line: cursor.pos,
            line_span: consumed,
        });
        cursor.advance(consumed);
    }

    headings
}
