// src/report.rs
use std::fmt;

use crate::models::ScanResult;

/// Rows shown when not every category is requested.
pub const DEFAULT_TOP: usize = 5;

/// Printed instead of a table when the scan found nothing.
pub const NO_FILES_MESSAGE: &str = "No files found.";

const LABEL_WIDTH: usize = 12;
const LINES_WIDTH: usize = 5;
const PERCENT_WIDTH: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub category: String,
    pub lines: u64,
    pub percent: f64,
}

/// A ranked, percentage-annotated view of a [`ScanResult`].
///
/// `total_lines` always covers every scanned category, including any that
/// were cut from `rows`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total_lines: u64,
    pub total_categories: usize,
}

impl Report {
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_categories == 0
    }

    /// Number of categories left out of `rows` by the top-N cutoff.
    #[inline]
    #[must_use]
    pub const fn hidden_categories(&self) -> usize {
        self.total_categories.saturating_sub(self.rows.len())
    }

    #[inline]
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Sorts categories by line count and computes each one's share.
///
/// Ties are broken by category name so output is stable. Unless `show_all`
/// is set, only the first [`DEFAULT_TOP`] rows are kept.
#[must_use]
pub fn build_report(result: &ScanResult, show_all: bool) -> Report {
    let total_lines = result.total_lines();

    let mut sorted: Vec<_> = result.iter().collect();
    sorted.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.category.cmp(&b.category)));

    if !show_all {
        sorted.truncate(DEFAULT_TOP);
    }

    let rows = sorted
        .into_iter()
        .map(|stats| ReportRow {
            category: stats.category.clone(),
            lines: stats.lines,
            percent: stats.percentage_of(total_lines),
        })
        .collect();

    Report {
        rows,
        total_lines,
        total_categories: result.len(),
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, fill: &str) -> fmt::Result {
    writeln!(
        f,
        "| {} | {} | {} |",
        fill.repeat(LABEL_WIDTH),
        fill.repeat(LINES_WIDTH),
        fill.repeat(PERCENT_WIDTH)
    )
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, lines: u64, percent: f64) -> fmt::Result {
    writeln!(f, "| {label:<12.12} | {lines:>5} | {percent:>6.1}% |")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "{NO_FILES_MESSAGE}");
        }

        writeln!(f, "| FileType     | Lines | Percent |")?;
        write_rule(f, "-")?;
        for row in &self.rows {
            write_row(f, &row.category, row.lines, row.percent)?;
        }
        write_rule(f, "=")?;
        write_row(f, "Total", self.total_lines, 100.0)
    }
}
