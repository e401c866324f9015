// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::core::error::ScanError;
use crate::core::exclude::ExclusionFilter;
use crate::core::scanner::scan_directory_with;
use crate::report::{Report, build_report};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory to scan
    pub directory: PathBuf,

    /// Show every file type instead of only the top five
    #[arg(short, long)]
    pub all: bool,

    /// Extra directory names or glob patterns to skip (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

/// Scans `args.directory` and builds the report without printing it.
///
/// # Errors
///
/// This function returns an error if:
/// * An exclude pattern is not valid glob syntax
/// * The directory does not exist
/// * The directory walk fails
pub fn analyze(args: &Args) -> Result<Report> {
    let filter = ExclusionFilter::with_patterns(&args.exclude)?;

    let result = scan_directory_with(&args.directory, &filter).map_err(|err| match err {
        ScanError::Traversal { .. } => anyhow::Error::new(err).context("failed to analyze directory"),
        other => anyhow::Error::new(other),
    })?;

    let report = build_report(&result, args.all);
    debug!(
        files = result.total_files(),
        lines = report.total_lines,
        categories = report.total_categories,
        hidden = report.hidden_categories(),
        skipped = result.skipped(),
        "scan complete"
    );

    Ok(report)
}

/// Runs the scan and prints the table to stdout.
///
/// # Errors
///
/// Propagates any error from [`analyze`].
pub fn run(args: &Args) -> Result<()> {
    let report = analyze(args)?;
    print!("{report}");
    Ok(())
}
