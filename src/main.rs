//! CLI entry point for the review grading pipeline.
//!
//! Wires the loader, grader, and report writer over the standard file
//! layout: load reviews, drop and diagnose invalid ones, grade the rest,
//! save the graded report.

use anyhow::Result;
use clap::Parser;
use review_grader::grader::{TimestampedFileSink, process_reviews};
use review_grader::loader::load_reviews;
use review_grader::output::save_processed_reviews;
use review_grader::summary::{self, RunSummary};
use std::ffi::OsStr;
use std::path::Path;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "review_grader")]
#[command(about = "Grades employee performance reviews from a CSV file", long_about = None)]
struct Cli {
    /// CSV file of reviews to grade
    #[arg(short, long, default_value = "data/reviews.csv")]
    input: String,

    /// CSV file to write the graded report to
    #[arg(short, long, default_value = "data/graded_reviews.csv")]
    output: String,

    /// Path prefix for the timestamped rejection-diagnostics file
    #[arg(short = 'e', long, default_value = "logs/error_log")]
    error_log: String,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/review_grader.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("review_grader.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    // The default report and diagnostics paths live under directories that
    // may not exist yet
    for target in [&cli.output, &cli.error_log] {
        if let Some(parent) = Path::new(target).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let reviews = load_reviews(&cli.input)?;
    let loaded = reviews.len();

    let sink = TimestampedFileSink::new(&cli.error_log);
    let graded = process_reviews(reviews, &sink)?;

    save_processed_reviews(&graded, &cli.output)?;

    let summary = RunSummary::new(&cli.input, &cli.output, loaded, graded.len());
    summary::print_pretty(&summary);
    summary::print_json(&summary)?;

    Ok(())
}
