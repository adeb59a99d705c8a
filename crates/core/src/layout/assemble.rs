//! Grouping of positioned fragments into globally ordered lines.

use itertools::Itertools;

use super::fragment::Fragment;
use super::line::Line;

/// Assembles fragments into reading-order lines.
///
/// Fragments whose trimmed text is empty, or that carry layout-engine link
/// annotations, are discarded. The rest are sorted by `(page, top, left)` and
/// runs sharing a page and vertical position become one line each, so the
/// resulting lines are globally ordered by `(page, top, leftmost-left)`.
pub fn assemble_lines(mut fragments: Vec<Fragment>) -> Vec<Line> {
    fragments.retain(keep_fragment);
    fragments.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then(a.top.total_cmp(&b.top))
            .then(a.left.total_cmp(&b.left))
    });

    let mut lines = Vec::new();
    for ((page, _), group) in &fragments
        .into_iter()
        .chunk_by(|fragment| (fragment.page, fragment.top.to_bits()))
    {
        let fragments: Vec<Fragment> = group.collect();
        let top = fragments[0].top;
        lines.push(Line { page, top, fragments });
    }
    lines
}

fn keep_fragment(fragment: &Fragment) -> bool {
    let trimmed = fragment.text.trim();
    if trimmed.is_empty() {
        return false;
    }
    !trimmed.to_lowercase().starts_with("link to page")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(page: u32, top: f64, left: f64, text: &str) -> Fragment {
        Fragment {
            page,
            top,
            left,
            width: text.len() as f64 * 5.0,
            text: text.to_string(),
            font_size: 11.0,
            bold: false,
        }
    }

    #[test]
    fn groups_fragments_sharing_page_and_top() {
        let lines = assemble_lines(vec![
            fragment(1, 100.0, 50.0, "world"),
            fragment(1, 100.0, 10.0, "hello"),
            fragment(1, 120.0, 10.0, "next"),
        ]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].fragments.len(), 2);
        assert_eq!(lines[0].fragments[0].text, "hello");
        assert_eq!(lines[1].fragments[0].text, "next");
    }

    #[test]
    fn orders_lines_by_page_then_top() {
        let lines = assemble_lines(vec![
            fragment(2, 40.0, 10.0, "second page"),
            fragment(1, 700.0, 10.0, "first page bottom"),
            fragment(1, 40.0, 10.0, "first page top"),
        ]);
        let order: Vec<(u32, f64)> = lines.iter().map(|line| (line.page, line.top)).collect();
        assert_eq!(order, vec![(1, 40.0), (1, 700.0), (2, 40.0)]);
    }

    #[test]
    fn discards_blank_fragments() {
        let lines = assemble_lines(vec![
            fragment(1, 10.0, 10.0, "   "),
            fragment(1, 20.0, 10.0, "kept"),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].fragments[0].text, "kept");
    }

    #[test]
    fn discards_link_annotations() {
        let lines = assemble_lines(vec![
            fragment(1, 10.0, 10.0, "Link to page 14"),
            fragment(1, 20.0, 10.0, "LINK TO PAGE 3"),
            fragment(1, 30.0, 10.0, "linkage text kept"),
        ]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].fragments[0].text, "linkage text kept");
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(assemble_lines(Vec::new()).is_empty());
    }
}
