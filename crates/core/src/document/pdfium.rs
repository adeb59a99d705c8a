//! Positioned-fragment extraction via the pdfium engine.
//!
//! pdfium hands back per-character geometry and font metadata; this module
//! folds the characters of each visual text line into one `Fragment`,
//! converting the engine's bottom-origin coordinates to top-origin on the
//! way out. The PDF decoding itself stays inside pdfium.

use pdfium_render::prelude::*;

use crate::error::{ExtractError, Result};
use crate::layout::Fragment;

/// Fraction of a character's height two baselines may differ by while still
/// belonging to the same text line.
const BASELINE_TOLERANCE: f32 = 0.4;

/// Horizontal gap, as a fraction of the average character width, above which
/// a space is inserted between adjacent characters of a line.
const SPACE_GAP_RATIO: f32 = 0.3;

/// A positioned character in the engine's bottom-origin coordinate space.
#[derive(Debug, Clone)]
struct PositionedChar {
    ch: char,
    x: f32,
    /// Bottom edge of the character box.
    y: f32,
    width: f32,
    height: f32,
    /// Top edge of the character box.
    y1: f32,
    font_size: f32,
    bold: bool,
}

/// Extracts one fragment per visual text line from every page of the PDF.
pub fn extract_fragments(pdf_data: &[u8]) -> Result<Vec<Fragment>> {
    let bindings = Pdfium::bind_to_system_library()
        .map_err(|err| ExtractError::EngineUnavailable(err.to_string()))?;
    let pdfium = Pdfium::new(bindings);
    let document = pdfium
        .load_pdf_from_byte_slice(pdf_data, None)
        .map_err(map_engine_error)?;

    let mut fragments = Vec::new();
    for (page_idx, page) in document.pages().iter().enumerate() {
        let page_number = page_idx as u32 + 1;
        let page_height = page.height().value;
        let text = page.text().map_err(map_engine_error)?;
        let chars = collect_chars(&text);
        fragments.extend(fragments_from_chars(&chars, page_number, page_height));
    }
    tracing::debug!(fragments = fragments.len(), "extracted positioned fragments");
    Ok(fragments)
}

fn map_engine_error(err: PdfiumError) -> ExtractError {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError)
        | PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::SecurityError) => {
            ExtractError::PermissionDenied
        }
        other => ExtractError::MalformedInput(other.to_string()),
    }
}

#[allow(deprecated)] // PdfRect field access deprecated in pdfium-render 0.8.28
fn collect_chars(text: &PdfPageText) -> Vec<PositionedChar> {
    let mut chars = Vec::new();
    for ch in text.chars().iter() {
        let Some(unicode) = ch.unicode_char() else {
            continue;
        };
        if unicode == '\r' || unicode == '\n' {
            continue;
        }
        let Ok(rect) = ch.tight_bounds() else {
            continue;
        };
        chars.push(PositionedChar {
            ch: unicode,
            x: rect.left.value,
            y: rect.bottom.value,
            width: (rect.right.value - rect.left.value).abs(),
            height: (rect.top.value - rect.bottom.value).abs(),
            y1: rect.top.value,
            font_size: ch.scaled_font_size().value,
            bold: is_bold_font(&ch.font_name()),
        });
    }
    chars
}

/// A character is bold if its font name says so; pdfium exposes no reliable
/// weight for subset fonts, so the name is the signal.
fn is_bold_font(font_name: &str) -> bool {
    let lowered = font_name.to_lowercase();
    lowered.contains("bold") || lowered.contains("black") || lowered.contains("heavy")
}

/// Groups characters sharing a baseline band into fragments, top of page
/// first.
fn fragments_from_chars(
    chars: &[PositionedChar],
    page: u32,
    page_height: f32,
) -> Vec<Fragment> {
    if chars.is_empty() {
        return Vec::new();
    }
    let mut sorted: Vec<&PositionedChar> = chars.iter().collect();
    sorted.sort_by(|a, b| b.y.total_cmp(&a.y).then(a.x.total_cmp(&b.x)));

    let mut fragments = Vec::new();
    let mut run: Vec<&PositionedChar> = vec![sorted[0]];
    for ch in &sorted[1..] {
        let anchor = run[0];
        let tolerance = anchor.height.max(ch.height) * BASELINE_TOLERANCE;
        if (ch.y - anchor.y).abs() <= tolerance {
            run.push(ch);
        } else {
            fragments.push(build_fragment(&run, page, page_height));
            run = vec![ch];
        }
    }
    fragments.push(build_fragment(&run, page, page_height));
    fragments
}

/// Builds one fragment from the characters of a line, inserting spaces at
/// wide horizontal gaps. The fragment is bold when at least half of its
/// non-whitespace character weight is bold.
fn build_fragment(run: &[&PositionedChar], page: u32, page_height: f32) -> Fragment {
    let mut ordered: Vec<&PositionedChar> = run.to_vec();
    ordered.sort_by(|a, b| a.x.total_cmp(&b.x));

    let avg_width = ordered.iter().map(|c| c.width).sum::<f32>() / ordered.len() as f32;
    let space_gap = avg_width * SPACE_GAP_RATIO;

    let mut text = String::new();
    let mut total_weight = 0usize;
    let mut bold_weight = 0usize;
    for (i, ch) in ordered.iter().enumerate() {
        if i > 0 {
            let gap = ch.x - (ordered[i - 1].x + ordered[i - 1].width);
            if gap > space_gap {
                text.push(' ');
            }
        }
        text.push(ch.ch);
        if !ch.ch.is_whitespace() {
            total_weight += 1;
            if ch.bold {
                bold_weight += 1;
            }
        }
    }

    let left = ordered[0].x;
    let right = ordered
        .iter()
        .map(|c| c.x + c.width)
        .fold(left, f32::max);
    let y1 = ordered.iter().map(|c| c.y1).fold(f32::MIN, f32::max);
    let font_size = ordered.iter().map(|c| c.font_size).fold(0.0f32, f32::max);

    Fragment {
        page,
        top: f64::from((page_height - y1).max(0.0)),
        left: f64::from(left),
        width: f64::from(right - left),
        text,
        font_size: f64::from(font_size),
        bold: total_weight > 0 && bold_weight * 2 >= total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ch(c: char, x: f32, y: f32, bold: bool) -> PositionedChar {
        PositionedChar {
            ch: c,
            x,
            y,
            width: 6.0,
            height: 12.0,
            y1: y + 12.0,
            font_size: 12.0,
            bold,
        }
    }

    #[test]
    fn bold_font_names() {
        assert!(is_bold_font("TimesNewRoman-Bold"));
        assert!(is_bold_font("ABCDEE+Arial-BoldMT"));
        assert!(is_bold_font("Helvetica Black"));
        assert!(is_bold_font("SomeFont-Heavy"));
        assert!(!is_bold_font("TimesNewRoman"));
        assert!(!is_bold_font(""));
    }

    #[test]
    fn groups_chars_on_one_baseline_into_one_fragment() {
        let chars = vec![ch('H', 10.0, 700.0, false), ch('i', 16.0, 700.2, false)];
        let fragments = fragments_from_chars(&chars, 1, 800.0);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "Hi");
    }

    #[test]
    fn splits_fragments_at_baseline_jumps() {
        let chars = vec![ch('A', 10.0, 700.0, false), ch('B', 10.0, 680.0, false)];
        let fragments = fragments_from_chars(&chars, 1, 800.0);
        assert_eq!(fragments.len(), 2);
        // Sorted top of page first: the higher baseline comes out first.
        assert_eq!(fragments[0].text, "A");
        assert_eq!(fragments[1].text, "B");
    }

    #[test]
    fn inserts_space_at_wide_gaps() {
        let chars = vec![
            ch('A', 10.0, 700.0, false),
            ch('B', 16.0, 700.0, false),
            ch('C', 40.0, 700.0, false),
        ];
        let fragments = fragments_from_chars(&chars, 1, 800.0);
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "AB C");
    }

    #[test]
    fn converts_to_top_origin() {
        let chars = vec![ch('A', 10.0, 700.0, false)];
        let fragments = fragments_from_chars(&chars, 3, 800.0);
        assert_eq!(fragments[0].page, 3);
        // top = page_height - y1 = 800 - 712
        assert_eq!(fragments[0].top, 88.0);
    }

    #[test]
    fn bold_requires_half_the_character_weight() {
        let half_bold = vec![
            ch('A', 10.0, 700.0, true),
            ch('B', 16.0, 700.0, true),
            ch('C', 22.0, 700.0, false),
            ch('D', 28.0, 700.0, false),
        ];
        let fragments = fragments_from_chars(&half_bold, 1, 800.0);
        assert!(fragments[0].bold);

        let minority_bold = vec![
            ch('A', 10.0, 700.0, true),
            ch('B', 16.0, 700.0, false),
            ch('C', 22.0, 700.0, false),
        ];
        let fragments = fragments_from_chars(&minority_bold, 1, 800.0);
        assert!(!fragments[0].bold);
    }

    #[test]
    fn empty_page_yields_no_fragments() {
        assert!(fragments_from_chars(&[], 1, 800.0).is_empty());
    }
}
