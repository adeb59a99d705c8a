//! Hierarchical clause projection.

use serde::Serialize;

use crate::structure::ClauseForest;

/// One clause rendered for hierarchical output. `subclauses` is omitted from
/// serialized output when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseRecord {
    pub clause: String,
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subclauses: Vec<ClauseRecord>,
}

/// Renders the forest's retained roots, recursively, in root order.
pub fn clause_records(forest: &ClauseForest) -> Vec<ClauseRecord> {
    forest
        .root_indices()
        .iter()
        .map(|&root| record_at(forest, root))
        .collect()
}

fn record_at(forest: &ClauseForest, idx: usize) -> ClauseRecord {
    let node = forest.node(idx);
    ClauseRecord {
        clause: node.identifier.clone(),
        title: node.title.clone(),
        text: node.text(),
        subclauses: node
            .children
            .iter()
            .map(|&child| record_at(forest, child))
            .collect(),
    }
}
