//! Document model: clause nodes and paragraph reconstruction.

mod clause;

pub use clause::ClauseNode;
