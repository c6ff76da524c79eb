//! Per-run counters reported to the observability channel.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;

/// Counts for one pipeline run, logged after the report is saved.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub timestamp: DateTime<Utc>,
    pub input_path: String,
    pub report_path: String,
    pub loaded: usize,
    pub accepted: usize,
    pub rejected: usize,
}

impl RunSummary {
    pub fn new(input_path: &str, report_path: &str, loaded: usize, accepted: usize) -> Self {
        RunSummary {
            timestamp: Utc::now(),
            input_path: input_path.to_string(),
            report_path: report_path.to_string(),
            loaded,
            accepted,
            rejected: loaded.saturating_sub(accepted),
        }
    }

    /// Share of loaded records that were rejected, as a percentage.
    pub fn rejection_rate(&self) -> f64 {
        if self.loaded == 0 {
            0.0
        } else {
            (self.rejected as f64 / self.loaded as f64) * 100.0
        }
    }
}

/// Logs a run summary using Rust's debug pretty-print format.
pub fn print_pretty(summary: &RunSummary) {
    debug!("{:#?}", summary);
}

/// Logs a run summary as pretty-printed JSON.
pub fn print_json(summary: &RunSummary) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(summary)?);
    Ok(())
}
