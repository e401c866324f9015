// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod report;

pub use crate::cli::{Args, analyze, run};
pub use crate::core::category::{category_for_file_name, resolve_category};
pub use crate::core::error::{FileReadError, ScanError};
pub use crate::core::exclude::{EXCLUDED_DIRS, ExclusionFilter, is_excluded_dir};
pub use crate::core::lines::{count_lines, count_lines_in};
pub use crate::core::scanner::{check_root, scan_directory, scan_directory_with};
pub use crate::models::{FileStats, ScanResult};
pub use crate::report::{DEFAULT_TOP, NO_FILES_MESSAGE, Report, ReportRow, build_report};
