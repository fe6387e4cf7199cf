//! Scan report tracking.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ScanMode;
use crate::dedup::{CrossFileDuplicates, DuplicateRecord};

/// Per-file scan outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    /// Path relative to the repository root.
    pub path: PathBuf,

    /// Distinct non-blank entries after within-file deduplication.
    pub unique_entries: usize,

    /// Within-file duplicates as found before removal.
    pub duplicates: Vec<DuplicateRecord>,

    // Removal counts
    pub removed_within: usize,
    pub removed_cross: usize,

    /// Backup holding the file's content from before this run.
    pub backup: Option<PathBuf>,

    /// Non-fatal problem, e.g. the file vanished mid-run.
    pub warning: Option<String>,

    /// The file could not be read or rewritten.
    pub error: Option<String>,
}

impl FileReport {
    /// Create an empty report for a file.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Lines removed from this file by either stage.
    pub fn total_removed(&self) -> usize {
        self.removed_within + self.removed_cross
    }

    /// Remember the first backup taken for this file during the run.
    pub fn record_backup(&mut self, backup: Option<PathBuf>) {
        if self.backup.is_none() {
            self.backup = backup;
        }
    }
}

/// Aggregate result of one scan run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub mode: ScanMode,
    pub files: Vec<FileReport>,
    pub cross_file_duplicates: CrossFileDuplicates,
}

impl ScanReport {
    /// Create an empty report.
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Find the report for a file by its relative path.
    pub fn file_mut(&mut self, path: &Path) -> Option<&mut FileReport> {
        self.files.iter_mut().find(|f| f.path == path)
    }

    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    pub fn removed_within(&self) -> usize {
        self.files.iter().map(|f| f.removed_within).sum()
    }

    pub fn removed_cross(&self) -> usize {
        self.files.iter().map(|f| f.removed_cross).sum()
    }

    /// Lines removed by the run (or that would be, in report mode).
    pub fn total_removed(&self) -> usize {
        self.removed_within() + self.removed_cross()
    }

    /// Files that could not be read or rewritten.
    pub fn error_count(&self) -> usize {
        self.files.iter().filter(|f| f.error.is_some()).count()
    }

    /// Backups written during the run.
    pub fn backups(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().filter_map(|f| f.backup.as_deref())
    }

    /// No duplicates anywhere and every file was processed.
    pub fn is_clean(&self) -> bool {
        self.total_removed() == 0 && self.error_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = ScanReport::new(ScanMode::Fix);
        assert!(report.is_clean());
        assert_eq!(report.files_checked(), 0);
    }

    #[test]
    fn test_totals() {
        let mut report = ScanReport::new(ScanMode::Fix);
        let mut a = FileReport::new(PathBuf::from("data/a.txt"));
        a.removed_within = 2;
        let mut b = FileReport::new(PathBuf::from("data/b.txt"));
        b.removed_cross = 1;
        report.files.push(a);
        report.files.push(b);

        assert_eq!(report.removed_within(), 2);
        assert_eq!(report.removed_cross(), 1);
        assert_eq!(report.total_removed(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_error_makes_report_unclean() {
        let mut report = ScanReport::new(ScanMode::Report);
        let mut file = FileReport::new(PathBuf::from("data/a.txt"));
        file.error = Some("permission denied".into());
        report.files.push(file);

        assert_eq!(report.error_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_warning_keeps_report_clean() {
        let mut report = ScanReport::new(ScanMode::Fix);
        let mut file = FileReport::new(PathBuf::from("data/gone.txt"));
        file.warning = Some("File not found".into());
        report.files.push(file);
        assert!(report.is_clean());
    }

    #[test]
    fn test_first_backup_is_kept() {
        let mut file = FileReport::new(PathBuf::from("data/a.txt"));
        file.record_backup(Some(PathBuf::from("first.bak")));
        file.record_backup(Some(PathBuf::from("second.bak")));
        file.record_backup(None);
        assert_eq!(file.backup, Some(PathBuf::from("first.bak")));
    }

    #[test]
    fn test_file_mut_lookup() {
        let mut report = ScanReport::new(ScanMode::Fix);
        report.files.push(FileReport::new(PathBuf::from("data/a.txt")));
        assert!(report.file_mut(Path::new("data/a.txt")).is_some());
        assert!(report.file_mut(Path::new("data/b.txt")).is_none());
    }
}
