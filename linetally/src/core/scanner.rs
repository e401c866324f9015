// src/core/scanner.rs
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::core::category::category_for_file_name;
use crate::core::error::{FileReadError, ScanError};
use crate::core::exclude::ExclusionFilter;
use crate::core::lines::count_lines;
use crate::models::ScanResult;


/// Scans `root` with the built-in exclusion set.
///
/// # Errors
///
/// See [`scan_directory_with`].
#[inline]
pub fn scan_directory(root: &Path) -> Result<ScanResult, ScanError> {
    scan_directory_with(root, &ExclusionFilter::new())
}

/// Walks `root` depth-first and tallies lines per file category.
///
/// Directories rejected by `filter` are pruned along with everything below
/// them. The root itself is always walked, whatever its name. Files that
/// cannot be read are logged, counted as skipped and left out of the totals.
///
/// # Arguments
///
/// * `root` - The directory to scan
/// * `filter` - Decides which directories to prune
///
/// # Returns
///
/// * `Ok(ScanResult)` - Line and file totals keyed by category
///
/// # Errors
///
/// This function returns an error if:
/// * `root` does not exist
/// * The walk itself fails, e.g. a directory cannot be listed
pub fn scan_directory_with(root: &Path, filter: &ExclusionFilter) -> Result<ScanResult, ScanError> {
    check_root(root)?;

    let mut result = ScanResult::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(e, filter))
    {
        let entry = entry.map_err(|source| {
            let path = source.path().unwrap_or(root).to_path_buf();
            ScanError::Traversal { path, source }
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        match tally_file(&entry) {
            Ok((category, lines)) => {
                debug!(path = %entry.path().display(), %category, lines, "counted");
                result.record(category, lines);
            }
            Err(err) => {
                warn!("{err}");
                result.record_skipped();
            }
        }
    }

    if result.skipped() > 0 {
        warn!(skipped = result.skipped(), "some files could not be read and were left out");
    }

    Ok(result)
}

/// Fails early when the scan root does not exist.
///
/// Only a missing path is rejected here. Any other stat failure (permission
/// denied on a parent, a file used as a directory) is left for the walk to
/// report as [`ScanError::Traversal`]. A regular file is a valid root and is
/// counted on its own.
///
/// # Errors
///
/// Returns [`ScanError::PathNotFound`].
pub fn check_root(root: &Path) -> Result<(), ScanError> {
    match fs::metadata(root) {
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ScanError::PathNotFound {
            path: root.to_path_buf(),
        }),
        _ => Ok(()),
    }
}

fn should_prune(entry: &DirEntry, filter: &ExclusionFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let excluded = filter.excludes(&entry.file_name().to_string_lossy());
    if excluded {
        debug!(path = %entry.path().display(), "skipping excluded directory");
    }
    excluded
}

fn tally_file(entry: &DirEntry) -> Result<(String, u64), FileReadError> {
    let lines = count_lines(entry.path()).map_err(|source| FileReadError {
        path: entry.path().to_path_buf(),
        source,
    })?;
    let category = category_for_file_name(&entry.file_name().to_string_lossy());
    Ok((category, lines))
}
