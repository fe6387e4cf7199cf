//! The full scan run.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::dedup::{
    find_cross_file_duplicates, remove_cross_file_duplicates, remove_file_duplicates, scan_file,
    OccurrenceMap,
};
use crate::error::{Error, Result};
use crate::fs::find_wordlists;
use crate::output::{print_error, print_info, print_rule, print_success, print_warning};
use crate::scan::state::{FileReport, ScanReport};

/// Scan every wordlist under the data directory, removing within-file
/// duplicates first and cross-file duplicates second.
///
/// Per-file failures are recorded in the report and never abort the run;
/// only an unreadable data directory does.
pub fn run_scan(config: &Config) -> Result<ScanReport> {
    let mode = config.options.mode;
    let quiet = config.options.quiet;
    let mut report = ScanReport::new(mode);

    let files = find_wordlists(config)?;
    if files.is_empty() {
        if !quiet {
            print_info(&format!(
                "No .{} files found in {}",
                config.wordlists.extension,
                config.wordlists.data_dir.display()
            ));
        }
        return Ok(report);
    }

    tracing::info!("Checking {} file(s) in {} mode", files.len(), mode);
    if !quiet {
        print_info(&format!("Checking {} file(s) for duplicates...", files.len()));
        println!();
    }

    let mut occurrences: BTreeMap<PathBuf, OccurrenceMap> = BTreeMap::new();
    let mut backed_up: BTreeSet<PathBuf> = BTreeSet::new();

    for path in &files {
        let relative = config.relative(path).to_path_buf();
        let mut file_report = FileReport::new(relative.clone());

        if let Some(occ) = check_file(config, path, &mut file_report) {
            if file_report.backup.is_some() {
                backed_up.insert(relative.clone());
            }
            occurrences.insert(relative, occ);
        }

        report.files.push(file_report);
    }

    if !quiet {
        print_rule('-');
        print_info("Checking for duplicates across files...");
    }

    let cross = find_cross_file_duplicates(&occurrences);
    if cross.is_empty() {
        if !quiet {
            print_success("No cross-file duplicates found");
        }
    } else {
        if !quiet {
            print_info(&format!(
                "Found {} word(s) duplicated across files",
                cross.len()
            ));
        }

        for (file, outcome) in remove_cross_file_duplicates(config, &cross, mode, &backed_up) {
            let Some(file_report) = report.file_mut(&file) else {
                continue;
            };

            match outcome {
                Ok(removal) => {
                    if !quiet && removal.removed > 0 {
                        println!(
                            "  Removed {} cross-file duplicate(s) from {}",
                            removal.removed,
                            file.display()
                        );
                    }
                    file_report.removed_cross = removal.removed;
                    file_report.record_backup(removal.backup);
                }
                Err(e) => record_failure(file_report, e, quiet),
            }
        }
    }

    report.cross_file_duplicates = cross;
    Ok(report)
}

/// Detect and remove within-file duplicates for one file.
///
/// Returns the file's occurrence map for the cross-file stage, or `None`
/// when the file could not be read.
fn check_file(
    config: &Config,
    path: &Path,
    file_report: &mut FileReport,
) -> Option<OccurrenceMap> {
    let quiet = config.options.quiet;
    let mode = config.options.mode;

    if !quiet {
        println!("Checking: {}", file_report.path.display());
    }

    let found = match scan_file(path) {
        Ok(found) => found,
        Err(e) => {
            record_failure(file_report, e, quiet);
            return None;
        }
    };

    let mut occurrences = found.occurrences;
    for dup in &found.duplicates {
        tracing::debug!(
            "{}:{} '{}' duplicates line {}",
            file_report.path.display(),
            dup.line,
            dup.word,
            dup.first_occurrence
        );
    }

    if found.duplicates.is_empty() {
        if !quiet {
            println!(
                "  No duplicates within file ({} unique entries)",
                occurrences.len()
            );
        }
    } else {
        if !quiet {
            println!("  Found {} duplicate(s) in file", found.duplicates.len());
        }

        match remove_file_duplicates(config, path, mode) {
            Ok(removal) => {
                file_report.removed_within = removal.removed;
                if let Some(backup) = &removal.backup {
                    if !quiet {
                        println!("  Backup created: {}", config.relative(backup).display());
                    }
                    // Line numbers shifted; index the rewritten file.
                    match scan_file(path) {
                        Ok(rescanned) => occurrences = rescanned.occurrences,
                        Err(e) => record_failure(file_report, e, quiet),
                    }
                }
                if !quiet && mode.mutates() {
                    println!("  Removed {} duplicate(s)", removal.removed);
                }
                file_report.record_backup(removal.backup);
            }
            Err(e) => record_failure(file_report, e, quiet),
        }
    }

    file_report.unique_entries = occurrences.len();
    file_report.duplicates = found.duplicates;
    if !quiet {
        println!();
    }

    Some(occurrences)
}

/// Note a per-file failure: missing files are warnings, anything else an error.
fn record_failure(file_report: &mut FileReport, error: Error, quiet: bool) {
    if error.is_not_found() {
        tracing::warn!("File not found: {}", file_report.path.display());
        if !quiet {
            print_warning(&format!("File not found: {}", file_report.path.display()));
        }
        file_report.warning = Some(error.to_string());
    } else {
        tracing::error!("{}", error);
        print_error(&error.to_string());
        file_report.error = Some(error.to_string());
    }
}
