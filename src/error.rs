//! Error types for the wordlist-dedup application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Version control errors
    #[error("Git error: {0}")]
    Git(String),

    #[error("A pre-commit hook already exists at {0} (use --force to overwrite)")]
    HookExists(PathBuf),

    // File system errors
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory traversal error: {0}")]
    Walk(#[from] walkdir::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means the file simply is not there.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Read { source, .. } | Error::Write { source, .. } | Error::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const COMMIT_BLOCKED: i32 = 1;
    pub const CONFIG_ERROR: i32 = 3;
    pub const GIT_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
