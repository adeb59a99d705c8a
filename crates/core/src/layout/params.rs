//! Extraction parameters.
//!
//! Contains ExtractParams for controlling line assembly, heading gating and
//! body partitioning. A params value is immutable once built and is threaded
//! by reference into each pipeline stage, so concurrent documents can run
//! with different tuning.

use once_cell::sync::Lazy;
use regex::Regex;

/// Boilerplate line patterns for the numbered-standards document family:
/// copyright and licensing stamps, standard-number repetitions in running
/// headers, "– N –" page banners and OCR separator runs. Anchored patterns
/// match at the start of the trimmed line.
static DEFAULT_SKIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^copyright british standards institution",
        r"(?i)^provided by accuris",
        r"(?i)^licensee=",
        r"(?i)^not for resale",
        r"(?i)^no reproduction or networking permitted",
        r"(?i)^bs en ",
        r"(?i)^iec 61513",
        r"(?i)^61513",
        r"(?i)^raising standards worldwide",
        r"^–\s*\d+\s*–",
        r"^--[`',.-]{5,}",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Parameters for clause extraction.
///
/// The gap thresholds are empirically tuned for the supported document
/// family; no derivation is claimed for them.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// Horizontal gap between adjacent fragments of one line above which a
    /// word separator is inserted, in layout units.
    pub merge_gap: f64,

    /// Vertical gap between consecutive kept body lines on the same page
    /// above which a paragraph break is forced, in layout units.
    pub para_gap: f64,

    /// Minimum dominant font size for a line to qualify as a heading.
    pub heading_min_font: f64,

    /// Minimum bold-character ratio for a line to qualify as a heading.
    pub heading_min_bold: f64,

    /// Boilerplate patterns dropped from clause bodies. Matched against
    /// trimmed line text.
    pub skip_patterns: Vec<Regex>,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            merge_gap: 1.5,
            para_gap: 18.0,
            heading_min_font: 14.0,
            heading_min_bold: 0.5,
            skip_patterns: DEFAULT_SKIP_PATTERNS.clone(),
        }
    }
}
