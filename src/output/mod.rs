//! Output module for console output and reports.
//!
//! Provides:
//! - Colored console output
//! - Scan summaries (human-readable and JSON)
//! - Commit gate verdicts

pub mod console;
pub mod stats;

pub use console::{
    print_config_summary, print_error, print_header, print_info, print_rule, print_success,
    print_warning,
};
pub use stats::{
    blocked_reason, print_commit_allowed, print_commit_blocked, print_json_report,
    print_scan_summary,
};
