//! Configuration structures and loading logic.

use crate::config::modes::ScanMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional configuration file looked up in the repository root.
pub const CONFIG_FILE_NAME: &str = "wordlist-dedup.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Repository root every relative path is resolved against.
    /// Never read from the file; set from the CLI at startup.
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub wordlists: WordlistConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Where the wordlists live and how they are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordlistConfig {
    /// Data directory, relative to the repository root.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// File name of the master aggregate wordlist.
    #[serde(default = "default_master_file")]
    pub master_file: String,

    /// Extension (without the dot) of wordlist files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for WordlistConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            master_file: default_master_file(),
            extension: default_extension(),
        }
    }
}

/// Scanner behaviour options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Scan mode (fix, report).
    #[serde(default)]
    pub mode: ScanMode,

    /// Suffix appended to a file name to form its backup name.
    #[serde(default = "default_backup_suffix")]
    pub backup_suffix: String,

    /// Suppress per-file progress output.
    #[serde(default)]
    pub quiet: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            backup_suffix: default_backup_suffix(),
            quiet: false,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_master_file() -> String {
    "all.txt".to_string()
}

fn default_extension() -> String {
    "txt".to_string()
}

fn default_backup_suffix() -> String {
    ".bak".to_string()
}

impl Config {
    /// Default configuration rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Absolute location of the data directory.
    pub fn data_directory(&self) -> PathBuf {
        self.root.join(&self.wordlists.data_dir)
    }

    /// Whether `path` names the master wordlist.
    ///
    /// Compared by trailing path component, so `small.txt` is not `all.txt`.
    pub fn is_master(&self, path: &Path) -> bool {
        path.ends_with(&self.wordlists.master_file)
    }

    /// Whether `path` has the wordlist extension.
    pub fn is_wordlist(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.wordlists.extension)
    }

    /// Backup location for `path`: the suffix is appended to the full file name.
    pub fn backup_path(&self, path: &Path) -> PathBuf {
        let mut name: OsString = path.as_os_str().to_owned();
        name.push(&self.options.backup_suffix);
        PathBuf::from(name)
    }

    /// Path of `path` relative to the repository root, for display and indexing.
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
