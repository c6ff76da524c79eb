//! Report persistence for graded reviews.

use std::path::Path;

use tracing::{error, info};

use crate::error::{Error, Result};
use crate::record::GradedReview;

/// Writes the graded report as CSV, overwriting any previous file.
///
/// The header row (`EmployeeID,Name,Department,Score,Grade`) is emitted
/// with the first record; an empty slice therefore produces an existing
/// but empty file. Running this twice with the same records yields
/// byte-identical output.
///
/// # Errors
///
/// Any open, serialize, or flush failure is logged and returned as
/// [`Error::ReportWrite`]; partial output beyond what the underlying
/// write already flushed is not cleaned up.
pub fn save_processed_reviews(records: &[GradedReview], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: csv::Error| {
        error!(path = %path.display(), error = %source, "Failed to write graded report");
        Error::ReportWrite {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut writer = csv::Writer::from_path(path).map_err(write_err)?;
    for record in records {
        writer.serialize(record).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(csv::Error::from(e)))?;

    info!(record_count = records.len(), path = %path.display(), "Saved graded reviews");
    Ok(())
}
