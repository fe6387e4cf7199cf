//! Within-file duplicate detection and removal.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::config::{Config, ScanMode};
use crate::dedup::line::LineEntry;
use crate::dedup::Removal;
use crate::error::Result;
use crate::fs::{create_backup, read_wordlist, write_wordlist};

/// Normalized line -> line number of its first occurrence in one file.
pub type OccurrenceMap = HashMap<String, usize>;

/// A later occurrence of an already-seen entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRecord {
    /// The duplicate line as written, without surrounding whitespace.
    pub word: String,
    pub line: usize,
    pub first_occurrence: usize,
}

/// Detection result for one file.
#[derive(Debug, Clone, Default)]
pub struct FileDuplicates {
    pub duplicates: Vec<DuplicateRecord>,
    pub occurrences: OccurrenceMap,
}

/// Find duplicate lines in `content`.
pub fn find_duplicates(content: &str) -> FileDuplicates {
    let mut result = FileDuplicates::default();

    for entry in LineEntry::parse(content) {
        let Some(key) = entry.normalized.as_ref() else {
            continue;
        };

        match result.occurrences.get(key) {
            Some(&first) => result.duplicates.push(DuplicateRecord {
                word: entry.text().to_string(),
                line: entry.number,
                first_occurrence: first,
            }),
            None => {
                result.occurrences.insert(key.clone(), entry.number);
            }
        }
    }

    result
}

/// Read `path` and find its duplicate lines.
pub fn scan_file(path: &Path) -> Result<FileDuplicates> {
    let content = read_wordlist(path)?;
    Ok(find_duplicates(&content))
}

/// Drop every later occurrence of an entry, keeping blank lines and the
/// relative order of everything kept.
///
/// Returns the reduced content and the number of dropped lines.
pub fn dedup_lines(content: &str) -> (String, usize) {
    let mut seen = HashSet::new();
    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;

    for entry in LineEntry::parse(content) {
        let fresh = match entry.normalized {
            Some(key) => seen.insert(key),
            None => true,
        };

        if fresh {
            kept.push_str(entry.raw);
        } else {
            removed += 1;
        }
    }

    (kept, removed)
}

/// Remove within-file duplicates from `path`.
///
/// The file is backed up and rewritten only when something is dropped and
/// the mode allows mutation.
pub fn remove_file_duplicates(config: &Config, path: &Path, mode: ScanMode) -> Result<Removal> {
    let content = read_wordlist(path)?;
    let (kept, removed) = dedup_lines(&content);

    if removed == 0 || !mode.mutates() {
        return Ok(Removal {
            removed,
            backup: None,
        });
    }

    let backup = create_backup(config, path)?;
    write_wordlist(path, &kept)?;

    Ok(Removal {
        removed,
        backup: Some(backup),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = "cat\ndog\nCAT\n\ndog\n";

    #[test]
    fn test_find_duplicates_sample() {
        let found = find_duplicates(SAMPLE);
        assert_eq!(
            found.duplicates,
            vec![
                DuplicateRecord {
                    word: "CAT".into(),
                    line: 3,
                    first_occurrence: 1
                },
                DuplicateRecord {
                    word: "dog".into(),
                    line: 5,
                    first_occurrence: 2
                },
            ]
        );
        assert_eq!(found.occurrences.len(), 2);
        assert_eq!(found.occurrences["cat"], 1);
        assert_eq!(found.occurrences["dog"], 2);
    }

    #[test]
    fn test_blank_lines_never_duplicates() {
        let found = find_duplicates("\n  \n\t\nword\n\n");
        assert!(found.duplicates.is_empty());

        let (kept, removed) = dedup_lines("\n  \n\t\nword\n\n");
        assert_eq!(removed, 0);
        assert_eq!(kept, "\n  \n\t\nword\n\n");
    }

    #[test]
    fn test_whitespace_and_case_are_equivalent() {
        let found = find_duplicates("Admin\n  admin  \nADMIN\t\n");
        assert_eq!(found.duplicates.len(), 2);
        assert!(found.duplicates.iter().all(|d| d.first_occurrence == 1));
        assert_eq!(found.duplicates[0].word, "admin");
    }

    #[test]
    fn test_dedup_preserves_order_and_raw_text() {
        let (kept, removed) = dedup_lines("b\n  A \nc\na\nB\r\nd");
        assert_eq!(kept, "b\n  A \nc\nd");
        assert_eq!(removed, 2);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let (once, removed) = dedup_lines(SAMPLE);
        assert_eq!(removed, 2);
        let (twice, removed_again) = dedup_lines(&once);
        assert_eq!(removed_again, 0);
        assert_eq!(once, twice);
        assert!(find_duplicates(&once).duplicates.is_empty());
    }

    #[test]
    fn test_remove_file_duplicates_with_backup() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_root(dir.path());
        let path = dir.path().join("a.txt");
        fs::write(&path, SAMPLE).unwrap();

        let removal = remove_file_duplicates(&config, &path, ScanMode::Fix).unwrap();
        assert_eq!(removal.removed, 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "cat\ndog\n\n");

        let backup = removal.backup.unwrap();
        assert_eq!(backup, dir.path().join("a.txt.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), SAMPLE);
    }

    #[test]
    fn test_remove_without_duplicates_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_root(dir.path());
        let path = dir.path().join("clean.txt");
        fs::write(&path, "one\ntwo\n").unwrap();

        let removal = remove_file_duplicates(&config, &path, ScanMode::Fix).unwrap();
        assert_eq!(removal, Removal::default());
        assert!(!config.backup_path(&path).exists());
    }

    #[test]
    fn test_report_mode_counts_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_root(dir.path());
        let path = dir.path().join("a.txt");
        fs::write(&path, SAMPLE).unwrap();

        let removal = remove_file_duplicates(&config, &path, ScanMode::Report).unwrap();
        assert_eq!(removal.removed, 2);
        assert!(removal.backup.is_none());
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
        assert!(!config.backup_path(&path).exists());
    }

    #[test]
    fn test_scan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = scan_file(&dir.path().join("gone.txt")).unwrap_err();
        assert!(err.is_not_found());
    }
}
