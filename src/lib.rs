//! wordlist-dedup - keep wordlists free of duplicate entries
//!
//! This library finds and removes duplicate lines in the wordlists of a data
//! directory, within each file and across files, and gates git commits on
//! the result.
//!
//! # Features
//!
//! - Case-insensitive, whitespace-trimmed duplicate detection
//! - In-place removal that keeps first occurrences and line order
//! - Byte-exact `.bak` backups before any rewrite
//! - Cross-file removal where the master wordlist always wins
//! - Report-only mode and JSON reports
//! - Pre-commit gate and hook installer
//!
//! # Example
//!
//! ```no_run
//! use wordlist_dedup::{run_scan, Config};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::for_root(std::env::current_dir()?);
//!     let report = run_scan(&config)?;
//!     println!("removed {} duplicate(s)", report.total_removed());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dedup;
pub mod error;
pub mod fs;
pub mod gate;
pub mod output;
pub mod scan;

// Re-exports for convenience
pub use config::{Config, ScanMode};
pub use error::{Error, Result};
pub use gate::{run_gate, GateOutcome, GitIndex, StagingArea};
pub use scan::{run_scan, FileReport, ScanReport};
