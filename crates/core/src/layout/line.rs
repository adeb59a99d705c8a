//! Reading-order lines of fragments sharing a vertical position.

use itertools::Itertools;

use super::fragment::Fragment;

/// Fragments grouped onto one visual line.
///
/// All fragments of a line share the same page. Text, font size and bold
/// ratio are derived on demand from the fragments, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub page: u32,
    pub top: f64,
    pub fragments: Vec<Fragment>,
}

impl Line {
    /// Concatenates fragment text left to right, inserting a separator where
    /// the horizontal gap between consecutive fragments exceeds `merge_gap`.
    fn raw_text(&self, merge_gap: f64) -> String {
        let mut ordered: Vec<&Fragment> = self.fragments.iter().collect();
        ordered.sort_by(|a, b| a.left.total_cmp(&b.left));

        let mut parts = String::new();
        let mut last_right: Option<f64> = None;
        for fragment in ordered {
            if fragment.text.is_empty() {
                continue;
            }
            if let Some(right) = last_right
                && fragment.left - right > merge_gap
            {
                parts.push(' ');
            }
            parts.push_str(&fragment.text);
            last_right = Some(fragment.right());
        }
        parts
    }

    /// Line text with runs of whitespace collapsed to single spaces and the
    /// ends trimmed.
    pub fn cleaned_text(&self, merge_gap: f64) -> String {
        self.raw_text(merge_gap).split_whitespace().join(" ")
    }

    /// Largest font size over the line's fragments, 0 if there are none.
    pub fn max_font_size(&self) -> f64 {
        self.fragments
            .iter()
            .map(|fragment| fragment.font_size)
            .fold(0.0, f64::max)
    }

    /// Fraction of the line's trimmed character weight carried by bold
    /// fragments, 0 if the line has no text.
    pub fn bold_ratio(&self) -> f64 {
        let weight = |fragment: &Fragment| fragment.text.trim().chars().count();
        let total: usize = self.fragments.iter().map(weight).sum();
        if total == 0 {
            return 0.0;
        }
        let bold: usize = self
            .fragments
            .iter()
            .filter(|fragment| fragment.bold)
            .map(weight)
            .sum();
        bold as f64 / total as f64
    }

    /// Left edge of the leftmost fragment, 0 if the line is empty.
    pub fn left(&self) -> f64 {
        let left = self
            .fragments
            .iter()
            .map(|fragment| fragment.left)
            .fold(f64::INFINITY, f64::min);
        if left.is_finite() { left } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(left: f64, width: f64, text: &str, font_size: f64, bold: bool) -> Fragment {
        Fragment {
            page: 1,
            top: 100.0,
            left,
            width,
            text: text.to_string(),
            font_size,
            bold,
        }
    }

    #[test]
    fn cleaned_text_inserts_space_on_wide_gap() {
        let line = Line {
            page: 1,
            top: 100.0,
            fragments: vec![fragment(10.0, 8.0, "4.1", 14.0, true), fragment(25.0, 40.0, "General", 14.0, true)],
        };
        assert_eq!(line.cleaned_text(1.5), "4.1 General");
    }

    #[test]
    fn cleaned_text_joins_adjacent_fragments() {
        let line = Line {
            page: 1,
            top: 100.0,
            fragments: vec![fragment(10.0, 8.0, "Gen", 11.0, false), fragment(18.5, 20.0, "eral", 11.0, false)],
        };
        assert_eq!(line.cleaned_text(1.5), "General");
    }

    #[test]
    fn cleaned_text_sorts_fragments_left_to_right() {
        let line = Line {
            page: 1,
            top: 100.0,
            fragments: vec![fragment(60.0, 30.0, "requirements", 11.0, false), fragment(10.0, 40.0, "Safety", 11.0, false)],
        };
        assert_eq!(line.cleaned_text(1.5), "Safety requirements");
    }

    #[test]
    fn cleaned_text_collapses_interior_whitespace() {
        let line = Line {
            page: 1,
            top: 100.0,
            fragments: vec![fragment(10.0, 60.0, "  4   Safety  requirements ", 16.0, true)],
        };
        assert_eq!(line.cleaned_text(1.5), "4 Safety requirements");
    }

    #[test]
    fn max_font_size_empty_line_is_zero() {
        let line = Line { page: 1, top: 0.0, fragments: vec![] };
        assert_eq!(line.max_font_size(), 0.0);
    }

    #[test]
    fn max_font_size_takes_largest_fragment() {
        let line = Line {
            page: 1,
            top: 0.0,
            fragments: vec![fragment(0.0, 5.0, "a", 9.0, false), fragment(6.0, 5.0, "b", 15.5, false)],
        };
        assert_eq!(line.max_font_size(), 15.5);
    }

    #[test]
    fn bold_ratio_weights_by_trimmed_characters() {
        let line = Line {
            page: 1,
            top: 0.0,
            fragments: vec![fragment(0.0, 10.0, "bold", 12.0, true), fragment(11.0, 30.0, "regular text", 12.0, false)],
        };
        // 4 bold characters out of 16 trimmed characters total.
        let expected = 4.0 / 16.0;
        assert!((line.bold_ratio() - expected).abs() < 1e-9);
    }

    #[test]
    fn bold_ratio_no_text_is_zero() {
        let line = Line { page: 1, top: 0.0, fragments: vec![] };
        assert_eq!(line.bold_ratio(), 0.0);
    }
}
