//! Wordlist discovery under the data directory.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::output::print_warning;

/// One entry produced by the directory walk.
#[derive(Debug)]
enum WalkStep {
    /// A regular file, or a symlink to one.
    File(PathBuf),
    /// An entry below the data directory that could not be read.
    Unreadable(String),
}

/// Recursively find every wordlist in the data directory.
///
/// Entries are sorted by file name at each level, so the result is in
/// lexicographic path order. A missing data directory yields no files.
/// Only a failure on the data directory itself is an error; unreadable
/// entries below it are warned about and skipped.
pub fn find_wordlists(config: &Config) -> Result<Vec<PathBuf>> {
    let dir = config.data_directory();
    if !dir.exists() {
        tracing::debug!("Data directory {} does not exist", dir.display());
        return Ok(Vec::new());
    }

    let mut steps = Vec::new();
    for entry in WalkDir::new(&dir).sort_by_file_name() {
        match entry {
            // Symlinked wordlists count; `Path::is_file` follows the link.
            Ok(entry) if entry.path().is_file() => {
                steps.push(WalkStep::File(entry.into_path()));
            }
            Ok(_) => {}
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => steps.push(WalkStep::Unreadable(e.to_string())),
        }
    }

    Ok(collect_wordlists(config, steps))
}

fn collect_wordlists(
    config: &Config,
    steps: impl IntoIterator<Item = WalkStep>,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for step in steps {
        match step {
            WalkStep::File(path) => {
                if config.is_wordlist(&path) {
                    files.push(path);
                }
            }
            WalkStep::Unreadable(message) => {
                tracing::warn!("Skipping unreadable entry: {}", message);
                if !config.options.quiet {
                    print_warning(&format!("Skipping unreadable entry: {}", message));
                }
            }
        }
    }

    files
}
