// src/models/file_stats.rs

/// Accumulated totals for one file category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStats {
    pub category: String,
    pub lines: u64,
    pub files: u64,
}

impl FileStats {
    /// Starts a category from its first file.
    #[inline]
    #[must_use]
    pub const fn new(category: String, lines: u64) -> Self {
        Self {
            category,
            lines,
            files: 1,
        }
    }

    #[inline]
    pub const fn add_file(&mut self, lines: u64) {
        self.lines = self.lines.saturating_add(lines);
        self.files = self.files.saturating_add(1);
    }

    /// Share of `total_lines` held by this category, in percent.
    ///
    /// A zero total yields 0.0 instead of NaN.
    #[inline]
    #[must_use]
    #[expect(clippy::as_conversions, reason = "Precision not critical")]
    #[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn percentage_of(&self, total_lines: u64) -> f64 {
        if total_lines == 0 {
            return 0.0;
        }
        (self.lines as f64 / total_lines as f64) * 100.0
    }
}
