//! Noise filtering for boilerplate lines and layout debris.

use crate::layout::{ExtractParams, Line};

/// Returns true for lines that are document noise rather than clause prose:
/// table-of-contents leader lines (a dot run ending in a page number),
/// OCR separator runs, and the configured boilerplate patterns.
///
/// Stateless: filtering the same lines twice yields the same kept set.
pub fn should_skip(params: &ExtractParams, text: &str) -> bool {
    let stripped = text.trim();
    if stripped.is_empty() {
        return false;
    }
    if stripped.contains("...")
        && stripped
            .split_whitespace()
            .last()
            .is_some_and(|token| token.chars().all(|c| c.is_ascii_digit()))
    {
        return true;
    }
    if stripped.contains("--```") {
        return true;
    }
    params.skip_patterns.iter().any(|pattern| pattern.is_match(stripped))
}

/// Returns true for short, unpunctuated, non-bold remnants of layout
/// artifacts (stray running headers, column debris).
///
/// Bold or punctuated short lines are kept; they are assumed meaningful
/// (list markers, short genuine sentences).
pub fn looks_like_fragment(line: &Line, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if line.bold_ratio() > 0.0 {
        return false;
    }
    if text.starts_with(['•', '–', '-', '(', ')']) {
        return false;
    }
    if text.contains(['.', ',', ';', ':', '!', '?']) {
        return false;
    }
    let words = text.split_whitespace().count();
    (2..=6).contains(&words)
}
