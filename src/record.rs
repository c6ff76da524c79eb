//! Record types flowing through the grading pipeline.

use serde::Serialize;

/// An employee's score as classified at load time.
///
/// Classification is total: every raw CSV value lands in exactly one
/// variant, and the grader matches exhaustively over it.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    /// Parses as a decimal number.
    Numeric(f64),
    /// Empty after trimming.
    Absent,
    /// Present but unparsable; carries the trimmed original text.
    NonNumeric(String),
}

impl Score {
    /// Classifies a raw CSV field: trim, empty means [`Score::Absent`],
    /// anything `f64`-parsable is [`Score::Numeric`], the rest becomes
    /// [`Score::NonNumeric`] with the trimmed text preserved for
    /// diagnostics.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Score::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => Score::Numeric(value),
            Err(_) => Score::NonNumeric(trimmed.to_string()),
        }
    }
}

/// One employee review as loaded from the input CSV, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub score: Score,
}

/// An accepted review with its grade attached, serialized to the report.
///
/// Field order here is the report's column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedReview {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Grade")]
    pub grade: String,
}
