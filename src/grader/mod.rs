//! Review validation and grading.
//!
//! This module screens loaded records, assigns letter grades to the
//! accepted ones, and routes per-record rejection diagnostics to a
//! timestamp-named side-channel file.

mod diagnostics;
mod grade;
mod process;

pub use diagnostics::{Clock, DiagnosticsSink, SystemClock, TimestampedFileSink};
pub use grade::assign_grade;
pub use process::{Rejection, process_reviews};
