// src/core/exclude.rs
use glob::Pattern;

use crate::core::error::ScanError;

/// Directory names that are never descended into.
///
/// Version control metadata, dependency trees, build output, IDE settings and
/// language caches.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    "node_modules",
    "vendor",
    "bower_components",
    "target",
    "build",
    "dist",
    "out",
    "bin",
    "obj",
    ".idea",
    ".vscode",
    ".vs",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".venv",
    "venv",
    ".gradle",
    ".next",
    ".nuxt",
];

/// Returns `true` if a directory with this base name must be skipped.
///
/// Matching is exact and case-sensitive. Only directory names should be
/// passed here; files are never excluded.
#[inline]
#[must_use]
pub fn is_excluded_dir(name: &str) -> bool {
    !name.is_empty() && EXCLUDED_DIRS.contains(&name)
}

/// Built-in exclusion set plus any extra glob patterns from the command line.
#[derive(Debug, Default, Clone)]
pub struct ExclusionFilter {
    extra: Vec<Pattern>,
}

impl ExclusionFilter {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { extra: Vec::new() }
    }

    /// Builds a filter that also skips directories matching `patterns`.
    ///
    /// Each pattern is a glob matched against the directory's base name, so
    /// `generated` and `tmp-*` both work. Blank entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidPattern`] for the first pattern that is not
    /// valid glob syntax.
    pub fn with_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ScanError> {
        let mut extra = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() {
                continue;
            }
            let compiled = Pattern::new(pattern).map_err(|source| ScanError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;
            extra.push(compiled);
        }
        Ok(Self { extra })
    }

    #[inline]
    #[must_use]
    pub fn excludes(&self, dir_name: &str) -> bool {
        is_excluded_dir(dir_name) || self.extra.iter().any(|p| p.matches(dir_name))
    }
}
