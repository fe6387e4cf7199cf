//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::{Config, ScanMode, CONFIG_FILE_NAME};
use crate::error::Result;

/// Wordlist duplicate checker CLI.
#[derive(Parser, Debug)]
#[command(
    name = "wordlist-dedup",
    version,
    about = "Find and remove duplicate entries in wordlist files",
    long_about = "Scans the .txt wordlists under a data directory for duplicate lines \
                  (case-insensitive, surrounding whitespace ignored), both within each file \
                  and across files, and removes them while keeping a .bak copy.\n\n\
                  Entries in the master wordlist always win over other files."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository root (defaults to the current directory).
    #[arg(short, long, global = true, env = "WORDLIST_DEDUP_ROOT")]
    pub root: Option<PathBuf>,

    /// Path to configuration file (defaults to wordlist-dedup.toml in the root).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory holding the wordlists, relative to the root.
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// File name of the master wordlist.
    #[arg(short, long, global = true)]
    pub master: Option<String>,

    /// Scan mode.
    #[arg(long, value_enum, global = true)]
    pub mode: Option<ScanModeArg>,

    /// Print the scan report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Hide per-file progress information.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Scan all wordlists and remove duplicates (default).
    Check,
    /// Pre-commit gate: scan only if wordlists are staged, exit 1 to block the commit.
    Hook,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing configuration file.
        #[arg(long)]
        force: bool,
    },
    /// Install the pre-commit hook into the repository.
    InstallHook {
        /// Overwrite an existing pre-commit hook.
        #[arg(long)]
        force: bool,
    },
}

/// CLI scan mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScanModeArg {
    /// Remove duplicates, keeping backups.
    Fix,
    /// Only report duplicates.
    Report,
}

impl From<ScanModeArg> for ScanMode {
    fn from(arg: ScanModeArg) -> Self {
        match arg {
            ScanModeArg::Fix => ScanMode::Fix,
            ScanModeArg::Report => ScanMode::Report,
        }
    }
}

impl Args {
    /// The subcommand to run.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Check)
    }

    /// Effective repository root.
    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Configuration file to read, and whether it was asked for explicitly.
    pub fn config_path(&self, root: &Path) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (root.join(CONFIG_FILE_NAME), false),
        }
    }

    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(data_dir) = self.data_dir {
            config.wordlists.data_dir = data_dir;
        }

        if let Some(master) = self.master {
            config.wordlists.master_file = master;
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        // JSON output owns stdout
        if self.quiet || self.json {
            config.options.quiet = true;
        }
    }
}
