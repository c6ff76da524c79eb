//! Shared error types for the grading pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures a pipeline run surfaces to its caller.
///
/// Per-record problems (missing, non-numeric, or out-of-range scores) are
/// not represented here: those are `grader::Rejection`s, recovered locally
/// by dropping the record and logging a diagnostic.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("reviews file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file could not be read or decoded as CSV.
    #[error("failed to read reviews from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The diagnostics file could not be written.
    #[error("failed to write diagnostics to {}", path.display())]
    DiagnosticsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The graded report could not be written.
    #[error("failed to write graded report to {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A grade was requested for a score that is not an ordinary number.
    #[error("cannot grade non-finite score: {score}")]
    NonFiniteScore { score: f64 },

    /// JSON rendering errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using the pipeline error.
pub type Result<T> = std::result::Result<T, Error>;
