//! Clause tree construction from detected headings.

use indexmap::IndexMap;

use crate::layout::{ExtractParams, Line};
use crate::model::ClauseNode;

use super::filter::{looks_like_fragment, should_skip};
use super::heading::{Heading, detect_headings, is_heading_shaped};

/// Forest of clauses recovered from one document.
///
/// Nodes live in an arena; parents own child indices and the root list owns
/// the top-level indices, so every node has exactly one owner and no back
/// references exist. After `build` returns, the forest is immutable.
#[derive(Debug, Default)]
pub struct ClauseForest {
    nodes: Vec<ClauseNode>,
    roots: Vec<usize>,
}

impl ClauseForest {
    /// Detects headings in the line sequence and builds the clause forest.
    pub fn build(lines: &[Line], params: &ExtractParams) -> Self {
        let headings = detect_headings(lines, params);
        Self::from_headings(lines, &headings, params)
    }

    /// Builds the forest from an already-detected heading list.
    ///
    /// Headings are processed in discovery order, one forward pass. The first
    /// occurrence of an identifier wins; later duplicates create no clause
    /// and their body ranges contribute nothing. A dotted identifier attaches
    /// to the clause named by dropping its last segment when that clause was
    /// detected, and becomes a root otherwise.
    pub(crate) fn from_headings(
        lines: &[Line],
        headings: &[Heading],
        params: &ExtractParams,
    ) -> Self {
        let mut nodes: Vec<ClauseNode> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut by_id: IndexMap<String, usize> = IndexMap::new();

        for (idx, heading) in headings.iter().enumerate() {
            if by_id.contains_key(&heading.identifier) {
                continue;
            }
            let node_idx = nodes.len();
            nodes.push(ClauseNode::new(&heading.identifier, &heading.title));
            by_id.insert(heading.identifier.clone(), node_idx);

            match parent_identifier(&heading.identifier) {
                Some(parent_id) => match by_id.get(parent_id) {
                    Some(&parent_idx) => nodes[parent_idx].children.push(node_idx),
                    // Parent heading was never detected: promote the orphan.
                    None => roots.push(node_idx),
                },
                None => roots.push(node_idx),
            }

            let start = heading.start_line + heading.line_span;
            let end = headings
                .get(idx + 1)
                .map_or(lines.len(), |next| next.start_line);
            collect_body(&mut nodes[node_idx], &lines[start..end], params);
        }

        roots.retain(|&root| well_formed_root(&nodes[root].identifier));
        roots.sort_by_key(|&root| numeric_key(&nodes[root].identifier));

        Self { nodes, roots }
    }

    /// Indices of the retained root clauses, in numeric identifier order.
    pub fn root_indices(&self) -> &[usize] {
        &self.roots
    }

    pub fn node(&self, idx: usize) -> &ClauseNode {
        &self.nodes[idx]
    }

    /// Total number of detected clauses.
    pub fn clause_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Accumulates the body of one clause from the lines between its heading and
/// the next. Noise lines, heading-shaped lines and layout debris are skipped;
/// a page change or an over-gap vertical jump since the previous kept line
/// first appends an empty paragraph-break marker.
fn collect_body(node: &mut ClauseNode, lines: &[Line], params: &ExtractParams) {
    let mut prev: Option<(u32, f64)> = None;
    for line in lines {
        let text = line.cleaned_text(params.merge_gap);
        if should_skip(params, &text) {
            continue;
        }
        if is_heading_shaped(&text) {
            continue;
        }
        if looks_like_fragment(line, &text) {
            continue;
        }
        if let Some((prev_page, prev_top)) = prev
            && (line.page != prev_page || line.top - prev_top > params.para_gap)
        {
            node.body_lines.push(String::new());
        }
        node.body_lines.push(text);
        prev = Some((line.page, line.top));
    }
}

fn parent_identifier(identifier: &str) -> Option<&str> {
    identifier.rfind('.').map(|pos| &identifier[..pos])
}

/// Root retention: dot-free identifiers, or identifiers whose dot count
/// matches their segment count less one (guards against malformed
/// identifiers reaching root selection).
fn well_formed_root(identifier: &str) -> bool {
    !identifier.contains('.')
        || identifier.matches('.').count() == identifier.split('.').count() - 1
}

/// Identifier as a sequence of integer segments, for numeric ordering
/// ("4.2" before "4.10").
fn numeric_key(identifier: &str) -> Vec<u64> {
    identifier
        .split('.')
        .map(|segment| segment.parse().unwrap_or(u64::MAX))
        .collect()
}
