//! Error types for the miranda clause extraction library.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for clause extraction operations.
///
/// Every variant is terminal for a single document: the pipeline surfaces the
/// first failing condition and halts, with no retries and no partial results.
/// Heuristic misses (an undetected heading, a misclassified noise line, an
/// orphaned subclause) are not errors; they degrade output silently.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("text extraction is not permitted for this document")]
    PermissionDenied,

    #[error("failed to parse document structure: {0}")]
    MalformedInput(String),

    #[error("no text extracted from document")]
    EmptyExtraction,

    #[error("no clauses were detected in the document")]
    NoStructureDetected,

    #[error("PDF engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;
