//! Score validation and grade assignment for loaded review records.

use std::fmt;

use tracing::{info, warn};

use super::diagnostics::DiagnosticsSink;
use super::grade::assign_grade;
use crate::error::Result;
use crate::record::{GradedReview, ReviewRecord, Score};

/// Why the grader dropped a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Score field was blank.
    MissingScore,
    /// Score field held unparsable text.
    NonNumericScore(String),
    /// Score parsed but fell outside [0, 100] (NaN lands here too).
    OutOfRange(f64),
}

impl Rejection {
    /// The self-contained diagnostics-file line for this rejection.
    pub fn diagnostic(&self, employee_id: &str) -> String {
        match self {
            Rejection::MissingScore => {
                format!("[ERR] Missing score for employee {employee_id}. Score cannot be empty.")
            }
            Rejection::NonNumericScore(text) => format!(
                "[ERR] Non-numeric score for employee {employee_id}: {text}. Score must be a number."
            ),
            Rejection::OutOfRange(value) => format!(
                "[ERR] Invalid score for employee {employee_id}: {value}. Score is out of range (0-100)."
            ),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingScore => write!(f, "missing score"),
            Rejection::NonNumericScore(text) => write!(f, "non-numeric score {text:?}"),
            Rejection::OutOfRange(value) => write!(f, "score {value} out of range"),
        }
    }
}

/// Validates and grades loaded records.
///
/// Accepted records come back as [`GradedReview`]s in input order.
/// Rejected records are dropped: each is logged as a warning and becomes
/// one diagnostic line, and iff at least one record was rejected the
/// collected lines go to `sink` in rejection order. With zero rejections
/// the sink is never invoked, so no diagnostics file exists.
///
/// # Errors
///
/// Only a failed sink write aborts the run; per-record problems never do.
pub fn process_reviews<S: DiagnosticsSink>(
    records: Vec<ReviewRecord>,
    sink: &S,
) -> Result<Vec<GradedReview>> {
    let mut accepted = Vec::new();
    let mut diagnostics = Vec::new();

    for record in records {
        match validate(&record) {
            Ok(score) => {
                let grade = assign_grade(score)?;
                accepted.push(GradedReview {
                    employee_id: record.employee_id,
                    name: record.name,
                    department: record.department,
                    score,
                    grade,
                });
            }
            Err(rejection) => {
                warn!(
                    employee_id = %record.employee_id,
                    reason = %rejection,
                    "Skipping review record"
                );
                diagnostics.push(rejection.diagnostic(&record.employee_id));
            }
        }
    }

    if !diagnostics.is_empty() {
        let written = sink.report(&diagnostics)?;
        info!(
            rejected = diagnostics.len(),
            path = %written.display(),
            "Wrote rejection diagnostics"
        );
    }

    Ok(accepted)
}

/// Splits a record into its usable score or the reason it has none.
fn validate(record: &ReviewRecord) -> std::result::Result<f64, Rejection> {
    match &record.score {
        Score::Absent => Err(Rejection::MissingScore),
        Score::NonNumeric(text) => Err(Rejection::NonNumericScore(text.clone())),
        Score::Numeric(value) if !(0.0..=100.0).contains(value) => {
            Err(Rejection::OutOfRange(*value))
        }
        Score::Numeric(value) => Ok(*value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::grader::diagnostics::TimestampedFileSink;
    use std::cell::RefCell;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Test double that records what the grader reports, no filesystem.
    struct CaptureSink {
        lines: RefCell<Vec<String>>,
    }

    impl CaptureSink {
        fn new() -> Self {
            Self {
                lines: RefCell::new(Vec::new()),
            }
        }
    }

    impl DiagnosticsSink for CaptureSink {
        fn report(&self, diagnostics: &[String]) -> Result<PathBuf> {
            self.lines.borrow_mut().extend_from_slice(diagnostics);
            Ok(PathBuf::from("captured"))
        }
    }

    struct FailingSink;

    impl DiagnosticsSink for FailingSink {
        fn report(&self, _diagnostics: &[String]) -> Result<PathBuf> {
            Err(Error::DiagnosticsWrite {
                path: PathBuf::from("unwritable"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    fn record(employee_id: &str, score: Score) -> ReviewRecord {
        ReviewRecord {
            employee_id: employee_id.to_string(),
            name: "Jane Doe".to_string(),
            department: "Engineering".to_string(),
            score,
        }
    }

    fn error_files(dir: &Path) -> Vec<PathBuf> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                let name = p.file_name().unwrap().to_str().unwrap();
                name.starts_with("errors_") && name.ends_with(".txt")
            })
            .collect()
    }

    #[test]
    fn test_valid_score_passes() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let processed = process_reviews(vec![record("1", Score::Numeric(85.0))], &sink).unwrap();

        assert_eq!(processed.len(), 1);
        assert_eq!(processed[0].grade, "B");
        assert_eq!(processed[0].employee_id, "1");
        assert_eq!(processed[0].name, "Jane Doe");
        assert_eq!(processed[0].department, "Engineering");
        assert_eq!(processed[0].score, 85.0);
        assert!(error_files(dir.path()).is_empty());
    }

    #[test]
    fn test_missing_score_is_skipped_and_logged() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let processed = process_reviews(vec![record("1", Score::Absent)], &sink).unwrap();

        assert!(processed.is_empty());
        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Missing score for employee 1"));
    }

    #[test]
    fn test_non_numeric_score_is_skipped_and_logged() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let records = vec![record("2", Score::NonNumeric("abc".to_string()))];
        let processed = process_reviews(records, &sink).unwrap();

        assert!(processed.is_empty());
        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Non-numeric score for employee 2"));
        assert!(content.contains("abc"));
    }

    #[test]
    fn test_negative_score_is_skipped_and_logged() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let processed = process_reviews(vec![record("3", Score::Numeric(-5.0))], &sink).unwrap();

        assert!(processed.is_empty());
        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Invalid score for employee 3"));
        assert!(content.contains("out of range"));
    }

    #[test]
    fn test_score_over_100_is_skipped_and_logged() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let processed = process_reviews(vec![record("4", Score::Numeric(150.0))], &sink).unwrap();

        assert!(processed.is_empty());
        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Invalid score for employee 4"));
    }

    #[test]
    fn test_mixed_records() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        let records = vec![
            record("1", Score::Numeric(90.0)),
            record("2", Score::Absent),
            record("3", Score::NonNumeric("abc".to_string())),
            record("4", Score::Numeric(75.0)),
        ];
        let processed = process_reviews(records, &sink).unwrap();

        assert_eq!(processed.len(), 2);
        assert_eq!(processed[0].grade, "A");
        assert_eq!(processed[1].grade, "C");

        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(&files[0]).unwrap();
        assert!(content.contains("Missing score for employee 2"));
        assert!(content.contains("Non-numeric score for employee 3"));
    }

    #[test]
    fn test_error_file_naming() {
        let dir = TempDir::new().unwrap();
        let sink = TimestampedFileSink::new(dir.path().join("errors"));

        process_reviews(vec![record("1", Score::Absent)], &sink).unwrap();

        let files = error_files(dir.path());
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("errors_"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_assigns_grades_correctly() {
        let records = vec![
            record("1", Score::Numeric(95.0)),
            record("2", Score::Numeric(82.0)),
            record("3", Score::Numeric(68.0)),
        ];
        let sink = CaptureSink::new();
        let processed = process_reviews(records, &sink).unwrap();

        assert_eq!(processed.len(), 3);
        assert_eq!(processed[0].grade, "A");
        assert_eq!(processed[1].grade, "B");
        assert_eq!(processed[2].grade, "D");
        assert!(sink.lines.borrow().is_empty());
    }

    #[test]
    fn test_diagnostics_follow_rejection_order() {
        let records = vec![
            record("1", Score::Absent),
            record("2", Score::NonNumeric("abc".to_string())),
            record("3", Score::Numeric(-5.0)),
            record("4", Score::Numeric(101.0)),
            record("5", Score::Numeric(75.0)),
        ];
        let sink = CaptureSink::new();
        let processed = process_reviews(records, &sink).unwrap();

        assert_eq!(processed.len(), 1);
        assert_eq!(processed[0].employee_id, "5");
        assert_eq!(processed[0].grade, "C");

        let lines = sink.lines.borrow();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Missing score for employee 1"));
        assert!(lines[1].contains("Non-numeric score for employee 2"));
        assert!(lines[2].contains("Invalid score for employee 3: -5"));
        assert!(lines[3].contains("Invalid score for employee 4: 101"));
    }

    #[test]
    fn test_nan_score_is_rejected_as_out_of_range() {
        let sink = CaptureSink::new();
        let processed = process_reviews(vec![record("6", Score::Numeric(f64::NAN))], &sink).unwrap();

        assert!(processed.is_empty());
        let lines = sink.lines.borrow();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Invalid score for employee 6"));
        assert!(lines[0].contains("NaN"));
    }

    #[test]
    fn test_sink_failure_propagates() {
        let records = vec![record("1", Score::Absent)];
        let err = process_reviews(records, &FailingSink).unwrap_err();
        assert!(matches!(err, Error::DiagnosticsWrite { .. }));
    }

    #[test]
    fn test_sink_not_invoked_when_all_records_valid() {
        let records = vec![record("1", Score::Numeric(100.0))];
        let processed = process_reviews(records, &FailingSink).unwrap();
        assert_eq!(processed.len(), 1);
        assert_eq!(processed[0].grade, "A");
    }

    #[test]
    fn test_accepted_order_matches_input_order() {
        let records = vec![
            record("10", Score::Numeric(60.0)),
            record("11", Score::Numeric(0.0)),
            record("12", Score::Numeric(100.0)),
        ];
        let sink = CaptureSink::new();
        let processed = process_reviews(records, &sink).unwrap();

        let ids: Vec<_> = processed.iter().map(|r| r.employee_id.as_str()).collect();
        assert_eq!(ids, vec!["10", "11", "12"]);
    }
}
