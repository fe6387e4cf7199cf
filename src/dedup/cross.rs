//! Cross-file duplicate detection and removal.
//!
//! An entry is a cross-file duplicate when it is a first occurrence in more
//! than one file. The master wordlist always keeps its copy; when no master
//! file is involved the first file in traversal order keeps it.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{Config, ScanMode};
use crate::dedup::line::LineEntry;
use crate::dedup::within::{dedup_lines, OccurrenceMap};
use crate::dedup::Removal;
use crate::error::Result;
use crate::fs::{create_backup, read_wordlist, write_wordlist};

/// Where an entry first appears in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Path relative to the repository root.
    pub file: PathBuf,
    pub line: usize,
}

/// Normalized entry -> every file it first appears in, in traversal order.
pub type CrossFileDuplicates = BTreeMap<String, Vec<Location>>;

/// Build the cross-file index and keep only entries found in two or more files.
///
/// `files` maps relative paths to their occurrence maps; its ordering is the
/// traversal order used for tie-breaks.
pub fn find_cross_file_duplicates(
    files: &BTreeMap<PathBuf, OccurrenceMap>,
) -> CrossFileDuplicates {
    let mut index: CrossFileDuplicates = BTreeMap::new();

    for (file, occurrences) in files {
        for (word, &line) in occurrences {
            index.entry(word.clone()).or_default().push(Location {
                file: file.clone(),
                line,
            });
        }
    }

    index.retain(|_, locations| locations.len() > 1);
    index
}

/// Decide which entries to drop from which files.
pub fn plan_cross_file_removals(
    config: &Config,
    duplicates: &CrossFileDuplicates,
) -> BTreeMap<PathBuf, BTreeSet<String>> {
    let mut plan: BTreeMap<PathBuf, BTreeSet<String>> = BTreeMap::new();

    for (word, locations) in duplicates {
        let has_master = locations.iter().any(|l| config.is_master(&l.file));
        let specific: Vec<&Path> = locations
            .iter()
            .map(|l| l.file.as_path())
            .filter(|f| !config.is_master(f))
            .collect();

        // Without a master copy the first specific file is authoritative.
        let losers = if has_master {
            &specific[..]
        } else {
            specific.get(1..).unwrap_or(&[])
        };

        for file in losers {
            plan.entry(file.to_path_buf())
                .or_default()
                .insert(word.clone());
        }
    }

    plan
}

/// Drop every non-blank line whose normalized form is in `remove`.
///
/// Returns the remaining content and the number of dropped lines.
pub fn filter_lines(content: &str, remove: &BTreeSet<String>) -> (String, usize) {
    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;

    for entry in LineEntry::parse(content) {
        match &entry.normalized {
            Some(key) if remove.contains(key) => removed += 1,
            _ => kept.push_str(entry.raw),
        }
    }

    (kept, removed)
}

/// Apply the cross-file removal plan.
///
/// Each affected file is backed up once and rewritten, and only when it
/// still contains something to drop; a second run with the same input is a
/// no-op. Files listed in `backed_up` already had their pre-run content saved
/// earlier in this run, so that backup is left as is. Failures are reported
/// per file and do not stop the others.
pub fn remove_cross_file_duplicates(
    config: &Config,
    duplicates: &CrossFileDuplicates,
    mode: ScanMode,
    backed_up: &BTreeSet<PathBuf>,
) -> Vec<(PathBuf, Result<Removal>)> {
    plan_cross_file_removals(config, duplicates)
        .into_iter()
        .map(|(file, words)| {
            let path = config.root.join(&file);
            let keep_backup = backed_up.contains(&file);
            let outcome = remove_from_file(config, &path, &words, mode, keep_backup);
            (file, outcome)
        })
        .collect()
}

fn remove_from_file(
    config: &Config,
    path: &Path,
    words: &BTreeSet<String>,
    mode: ScanMode,
    keep_backup: bool,
) -> Result<Removal> {
    let mut content = read_wordlist(path)?;
    if !mode.mutates() {
        // Nothing was rewritten by the within-file stage; count against what it would have left.
        content = dedup_lines(&content).0;
    }
    let (kept, removed) = filter_lines(&content, words);

    if removed == 0 || !mode.mutates() {
        return Ok(Removal {
            removed,
            backup: None,
        });
    }

    let backup = if keep_backup {
        config.backup_path(path)
    } else {
        create_backup(config, path)?
    };
    write_wordlist(path, &kept)?;

    Ok(Removal {
        removed,
        backup: Some(backup),
    })
}
