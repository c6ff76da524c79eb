//! CSV loader for employee review records.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::record::{ReviewRecord, Score};

/// Columns the pipeline understands, by their header names.
const COLUMNS: [&str; 4] = ["EmployeeID", "Name", "Department", "Score"];

/// Loads employee reviews from a comma-separated file with a header row.
///
/// Column order in the file is free: fields are matched to the header by
/// name. Nothing is validated here beyond CSV decoding: score content is
/// only classified into [`Score`] states and judged by the grader.
///
/// A row wider or narrower than the header is never fatal: values map to
/// header columns positionally, missing columns load as empty, surplus
/// values are dropped, and the row is logged with its line number.
///
/// # Errors
///
/// [`Error::NotFound`] if `path` does not exist, [`Error::Read`] if the
/// file cannot be decoded. An empty or header-only file is an empty
/// vector, not an error.
pub fn load_reviews(path: impl AsRef<Path>) -> Result<Vec<ReviewRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let read_err = |source: csv::Error| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;
    let headers = reader.headers().map_err(read_err)?.clone();

    let columns = COLUMNS.map(|name| {
        let found = headers.iter().position(|h| h == name);
        if found.is_none() && !headers.is_empty() {
            warn!(
                column = name,
                "Input header is missing a column; its values load as empty"
            );
        }
        found
    });
    let [id_col, name_col, department_col, score_col] = columns;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(read_err)?;
        if row.len() != headers.len() {
            warn!(
                line = row.position().map_or(0, |p| p.line()),
                found = row.len(),
                expected = headers.len(),
                "Row width differs from header; missing fields load as empty"
            );
        }

        records.push(ReviewRecord {
            employee_id: field(&row, id_col),
            name: field(&row, name_col),
            department: field(&row, department_col),
            score: Score::classify(score_col.and_then(|i| row.get(i)).unwrap_or("")),
        });
    }

    info!(record_count = records.len(), path = %path.display(), "Loaded review records");
    Ok(records)
}

fn field(row: &StringRecord, column: Option<usize>) -> String {
    column.and_then(|i| row.get(i)).unwrap_or("").to_string()
}
