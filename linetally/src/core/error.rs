// src/core/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan before or during the directory walk.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory '{}' does not exist", .path.display())]
    PathNotFound { path: PathBuf },

    #[error("failed to walk '{}'", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid exclude pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// A single file that could not be read. The scan logs it and moves on.
#[derive(Debug, Error)]
#[error("could not count lines in '{}': {source}", .path.display())]
pub struct FileReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
