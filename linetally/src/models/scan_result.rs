// src/models/scan_result.rs
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::models::FileStats;

/// Per-category totals produced by one scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    stats: BTreeMap<String, FileStats>,
    skipped: u64,
}

impl ScanResult {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stats: BTreeMap::new(),
            skipped: 0,
        }
    }

    /// Adds one file's line count to its category.
    pub fn record(&mut self, category: String, lines: u64) {
        match self.stats.entry(category) {
            Entry::Occupied(mut entry) => entry.get_mut().add_file(lines),
            Entry::Vacant(entry) => {
                let category = entry.key().clone();
                entry.insert(FileStats::new(category, lines));
            }
        }
    }

    /// Notes a file that could not be read. It contributes to no category.
    #[inline]
    pub const fn record_skipped(&mut self) {
        self.skipped = self.skipped.saturating_add(1);
    }

    #[inline]
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&FileStats> {
        self.stats.get(category)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FileStats> {
        self.stats.values()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Sum of lines over every category.
    #[inline]
    #[must_use]
    pub fn total_lines(&self) -> u64 {
        self.stats
            .values()
            .fold(0_u64, |acc, s| acc.saturating_add(s.lines))
    }

    #[inline]
    #[must_use]
    pub fn total_files(&self) -> u64 {
        self.stats
            .values()
            .fold(0_u64, |acc, s| acc.saturating_add(s.files))
    }

    #[inline]
    #[must_use]
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }
}
