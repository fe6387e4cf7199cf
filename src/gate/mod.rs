//! Commit gate.
//!
//! Runs the scanner when wordlists are staged for commit and tells the
//! caller whether the commit may proceed.

pub mod git;
pub mod hook;

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::output::print_info;
use crate::scan::{run_scan, ScanReport};

pub use git::GitIndex;
pub use hook::{install_hook, HOOK_SCRIPT};

/// Source of the paths staged for the next commit.
pub trait StagingArea {
    /// Staged added, copied or modified paths, relative to the repository root.
    fn staged_files(&self) -> Result<Vec<String>>;
}

/// What the gate decided.
#[derive(Debug)]
pub enum GateOutcome {
    /// No wordlist is staged; the scanner was not run.
    Skipped,
    /// The scan came back clean.
    Passed(ScanReport),
    /// The scan removed or found duplicates, or hit errors.
    Blocked(ScanReport),
}

impl GateOutcome {
    pub fn allows_commit(&self) -> bool {
        !matches!(self, GateOutcome::Blocked(_))
    }

    pub fn report(&self) -> Option<&ScanReport> {
        match self {
            GateOutcome::Skipped => None,
            GateOutcome::Passed(report) | GateOutcome::Blocked(report) => Some(report),
        }
    }
}

/// Keep the staged paths that are wordlists under the data directory.
pub fn staged_wordlists(config: &Config, staged: &[String]) -> Vec<PathBuf> {
    // git reports paths without a leading `./`
    let data_dir: PathBuf = config
        .wordlists
        .data_dir
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    staged
        .iter()
        .map(Path::new)
        .filter(|p| p.starts_with(&data_dir) && config.is_wordlist(p))
        .map(Path::to_path_buf)
        .collect()
}

/// Run the gate: scan only when a wordlist is staged.
pub fn run_gate(config: &Config, staging: &impl StagingArea) -> Result<GateOutcome> {
    let staged = staging.staged_files()?;
    let wordlists = staged_wordlists(config, &staged);

    if wordlists.is_empty() {
        tracing::debug!("No staged wordlists among {} staged file(s)", staged.len());
        return Ok(GateOutcome::Skipped);
    }

    tracing::info!("{} staged wordlist(s)", wordlists.len());
    if !config.options.quiet {
        print_info("Wordlist files detected, checking for duplicates...");
        println!();
    }

    let report = run_scan(config)?;
    if report.is_clean() {
        Ok(GateOutcome::Passed(report))
    } else {
        Ok(GateOutcome::Blocked(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct FakeIndex(Vec<&'static str>);

    impl StagingArea for FakeIndex {
        fn staged_files(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    fn fixture(files: &[(&str, &str)]) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        let mut config = Config::for_root(dir.path());
        config.options.quiet = true;
        (dir, config)
    }

    #[test]
    fn test_staged_wordlists_filter() {
        let config = Config::for_root("/repo");
        let staged = vec![
            "data/a.txt".to_string(),
            "data/web/dirs.txt".to_string(),
            "data/notes.md".to_string(),
            "database/x.txt".to_string(),
            "README.txt".to_string(),
        ];

        assert_eq!(
            staged_wordlists(&config, &staged),
            vec![PathBuf::from("data/a.txt"), PathBuf::from("data/web/dirs.txt")]
        );
    }

    #[test]
    fn test_staged_wordlists_dot_prefixed_data_dir() {
        let mut config = Config::for_root("/repo");
        config.wordlists.data_dir = PathBuf::from("./data");
        let staged = vec!["data/a.txt".to_string()];
        assert_eq!(staged_wordlists(&config, &staged), vec![PathBuf::from("data/a.txt")]);
    }

    #[test]
    fn test_no_staged_wordlists_skips_scan() {
        let (dir, config) = fixture(&[("data/a.txt", "cat\ncat\n")]);
        let outcome = run_gate(&config, &FakeIndex(vec!["src/main.rs", "README.md"])).unwrap();

        assert!(matches!(outcome, GateOutcome::Skipped));
        assert!(outcome.allows_commit());
        assert!(outcome.report().is_none());
        // The scanner never ran, so the duplicate is still there.
        assert_eq!(
            fs::read_to_string(dir.path().join("data/a.txt")).unwrap(),
            "cat\ncat\n"
        );
    }

    #[test]
    fn test_empty_staging_skips_scan() {
        let (_dir, config) = fixture(&[]);
        let outcome = run_gate(&config, &FakeIndex(vec![])).unwrap();
        assert!(matches!(outcome, GateOutcome::Skipped));
    }

    #[test]
    fn test_clean_wordlists_pass() {
        let (_dir, config) = fixture(&[("data/a.txt", "cat\n"), ("data/b.txt", "dog\n")]);
        let outcome = run_gate(&config, &FakeIndex(vec!["data/a.txt"])).unwrap();

        assert!(matches!(outcome, GateOutcome::Passed(_)));
        assert!(outcome.allows_commit());
    }

    #[test]
    fn test_duplicates_block_commit() {
        let (dir, config) = fixture(&[("data/a.txt", "cat\nCat\n")]);
        let outcome = run_gate(&config, &FakeIndex(vec!["data/a.txt"])).unwrap();

        assert!(!outcome.allows_commit());
        assert_eq!(outcome.report().unwrap().total_removed(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("data/a.txt")).unwrap(),
            "cat\n"
        );
    }
}
