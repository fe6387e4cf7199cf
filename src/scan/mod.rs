//! Scanner module.
//!
//! Provides:
//! - The full scan run (within-file, then cross-file)
//! - Per-file and aggregate scan reports

pub mod runner;
pub mod state;

pub use runner::run_scan;
pub use state::{FileReport, ScanReport};
