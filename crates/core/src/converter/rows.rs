//! Tabular clause projection.

use crate::structure::ClauseForest;

/// Header row of the tabular projection.
pub const ROW_HEADER: [&str; 5] = ["Clause", "Title", "Parent", "Level", "Text"];

/// Flattens the forest depth-first into header plus one row per clause.
/// `Level` starts at 1 for roots; `Parent` is empty for roots.
pub fn clause_rows(forest: &ClauseForest) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> =
        vec![ROW_HEADER.iter().map(|column| column.to_string()).collect()];
    for &root in forest.root_indices() {
        flatten_into(forest, root, None, 1, &mut rows);
    }
    rows
}

fn flatten_into(
    forest: &ClauseForest,
    idx: usize,
    parent: Option<&str>,
    level: usize,
    rows: &mut Vec<Vec<String>>,
) {
    let node = forest.node(idx);
    rows.push(vec![
        node.identifier.clone(),
        node.title.clone(),
        parent.unwrap_or("").to_string(),
        level.to_string(),
        node.text(),
    ]);
    for &child in &node.children {
        flatten_into(forest, child, Some(&node.identifier), level + 1, rows);
    }
}
