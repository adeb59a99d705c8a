//! High-level clause extraction API.
//!
//! Provides the main entry points:
//! - `extract_clauses()` - run the pipeline over PDF bytes
//! - `extract_clauses_from_file()` - the same, from a path
//! - `extract_clause_data()` - pipeline plus both output projections
//!
//! The pipeline is a synchronous, single-document batch: fragments are
//! extracted, assembled into lines, scanned for headings and folded into a
//! clause forest, each stage fully consuming its predecessor's output.

use std::path::Path;

use crate::converter::{ClauseRecord, clause_records, clause_rows};
use crate::document::extract_fragments;
use crate::error::{ExtractError, Result};
use crate::layout::{ExtractParams, assemble_lines};
use crate::structure::ClauseForest;

/// Parses PDF bytes and returns the recovered clause forest.
///
/// # Errors
/// `EmptyExtraction` when the document yields no text lines;
/// `NoStructureDetected` when lines exist but no clause heading is
/// recognized; engine failures as `PermissionDenied`, `MalformedInput` or
/// `EngineUnavailable`.
pub fn extract_clauses(pdf_data: &[u8], params: Option<ExtractParams>) -> Result<ClauseForest> {
    let params = params.unwrap_or_default();
    let fragments = extract_fragments(pdf_data)?;
    let lines = assemble_lines(fragments);
    if lines.is_empty() {
        return Err(ExtractError::EmptyExtraction);
    }
    tracing::debug!(lines = lines.len(), "assembled reading-order lines");

    let forest = ClauseForest::build(&lines, &params);
    if forest.is_empty() {
        return Err(ExtractError::NoStructureDetected);
    }
    tracing::debug!(clauses = forest.clause_count(), "built clause forest");
    Ok(forest)
}

/// Reads a PDF from disk and returns the recovered clause forest.
///
/// # Errors
/// `NotFound` when the path does not exist; otherwise as `extract_clauses`.
pub fn extract_clauses_from_file(
    path: &Path,
    params: Option<ExtractParams>,
) -> Result<ClauseForest> {
    if !path.exists() {
        return Err(ExtractError::NotFound(path.to_path_buf()));
    }
    let pdf_data = std::fs::read(path)?;
    extract_clauses(&pdf_data, params)
}

/// Runs the pipeline and renders both output projections: the hierarchical
/// records and the tabular rows (header included).
pub fn extract_clause_data(
    pdf_data: &[u8],
    params: Option<ExtractParams>,
) -> Result<(Vec<ClauseRecord>, Vec<Vec<String>>)> {
    let forest = extract_clauses(pdf_data, params)?;
    Ok((clause_records(&forest), clause_rows(&forest)))
}

/// File-path variant of `extract_clause_data`.
pub fn extract_clause_data_from_file(
    path: &Path,
    params: Option<ExtractParams>,
) -> Result<(Vec<ClauseRecord>, Vec<Vec<String>>)> {
    let forest = extract_clauses_from_file(path, params)?;
    Ok((clause_records(&forest), clause_rows(&forest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_not_found() {
        let err = extract_clauses_from_file(Path::new("/no/such/document.pdf"), None).unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }
}
