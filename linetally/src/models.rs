// src/models.rs
pub mod file_stats;
pub mod scan_result;

pub use file_stats::FileStats;
pub use scan_result::ScanResult;
