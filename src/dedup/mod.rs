//! Deduplication module.
//!
//! Provides:
//! - Line normalization (trimmed, lower-cased keys)
//! - Within-file duplicate detection and removal
//! - Cross-file duplicate detection and master-aware removal

pub mod cross;
pub mod line;
pub mod within;

use std::path::PathBuf;

use serde::Serialize;

pub use cross::{
    filter_lines, find_cross_file_duplicates, plan_cross_file_removals,
    remove_cross_file_duplicates, CrossFileDuplicates, Location,
};
pub use line::{normalize, LineEntry};
pub use within::{
    dedup_lines, find_duplicates, remove_file_duplicates, scan_file, DuplicateRecord,
    FileDuplicates, OccurrenceMap,
};

/// Outcome of a removal pass over one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Removal {
    /// Lines dropped (or that would be dropped in report mode).
    pub removed: usize,
    /// Backup written before the rewrite, if the file was rewritten.
    pub backup: Option<PathBuf>,
}
