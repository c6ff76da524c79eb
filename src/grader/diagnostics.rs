//! Diagnostics side channel for rejected records.
//!
//! The grader collects one human-readable line per rejection and hands the
//! batch to a [`DiagnosticsSink`]. The production sink writes a single
//! timestamp-named text file; tests substitute capturing sinks and fixed
//! clocks.

use std::fs;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use tracing::error;

use crate::error::{Error, Result};

/// Source of "now" for timestamp-named files.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock time in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Receiver for a run's rejection diagnostics.
///
/// Called at most once per run, only when at least one record was
/// rejected; returns the path written.
pub trait DiagnosticsSink {
    fn report(&self, diagnostics: &[String]) -> Result<PathBuf>;
}

/// Writes diagnostics to `<prefix>_<MM-DD-YYYY_HH:MM:SS>.txt`, one line
/// per rejected record.
pub struct TimestampedFileSink<C = SystemClock> {
    prefix: PathBuf,
    clock: C,
}

impl TimestampedFileSink<SystemClock> {
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self::with_clock(prefix, SystemClock)
    }
}

impl<C: Clock> TimestampedFileSink<C> {
    pub fn with_clock(prefix: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            prefix: prefix.into(),
            clock,
        }
    }

    /// The file this sink would write right now.
    pub fn target_path(&self) -> PathBuf {
        let stamp = self.clock.now().format("%m-%d-%Y_%H:%M:%S");
        PathBuf::from(format!("{}_{}.txt", self.prefix.display(), stamp))
    }
}

impl<C: Clock> DiagnosticsSink for TimestampedFileSink<C> {
    fn report(&self, diagnostics: &[String]) -> Result<PathBuf> {
        let path = self.target_path();
        let mut content = diagnostics.join("\n");
        content.push('\n');
        fs::write(&path, content).map_err(|source| {
            error!(path = %path.display(), error = %source, "Failed to write diagnostics");
            Error::DiagnosticsWrite {
                path: path.clone(),
                source,
            }
        })?;
        Ok(path)
    }
}
