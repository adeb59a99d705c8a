//! Structure recovery: noise filtering, heading detection and clause tree
//! construction.

mod filter;
mod heading;
mod tree;

pub use filter::{looks_like_fragment, should_skip};
pub use heading::{Heading, detect_headings};
pub use tree::ClauseForest;
