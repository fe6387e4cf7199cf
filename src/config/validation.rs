//! Configuration validation logic.

use std::path::{Component, Path};

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_data_dir(&config.wordlists.data_dir)?;
    validate_extension(&config.wordlists.extension)?;
    validate_master_file(&config.wordlists.master_file)?;
    validate_backup_suffix(&config.options.backup_suffix, &config.wordlists.extension)?;

    Ok(())
}

/// The data directory must stay inside the repository root.
pub fn validate_data_dir(data_dir: &Path) -> Result<()> {
    if data_dir.as_os_str().is_empty() {
        return Err(invalid("data_dir", "Data directory cannot be empty"));
    }

    if data_dir.is_absolute() {
        return Err(invalid(
            "data_dir",
            format!(
                "Data directory must be relative to the repository root (got {})",
                data_dir.display()
            ),
        ));
    }

    if data_dir
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(invalid(
            "data_dir",
            format!("Path traversal detected: '{}'", data_dir.display()),
        ));
    }

    Ok(())
}

/// Validate the wordlist extension.
pub fn validate_extension(extension: &str) -> Result<()> {
    if extension.is_empty() {
        return Err(invalid("extension", "Extension cannot be empty"));
    }

    if extension.starts_with('.') {
        return Err(invalid(
            "extension",
            format!("Extension should not include the dot (got '{}')", extension),
        ));
    }

    Ok(())
}

/// The master file is a bare file name.
pub fn validate_master_file(master_file: &str) -> Result<()> {
    if master_file.trim().is_empty() {
        return Err(invalid("master_file", "Master file name cannot be empty"));
    }

    if master_file.contains('/') || master_file.contains('\\') {
        return Err(invalid(
            "master_file",
            format!(
                "Path separators not allowed in master file name: '{}'",
                master_file
            ),
        ));
    }

    Ok(())
}

/// A backup must never look like a wordlist, or the next run would scan it.
pub fn validate_backup_suffix(suffix: &str, extension: &str) -> Result<()> {
    if suffix.is_empty() {
        return Err(invalid("backup_suffix", "Backup suffix cannot be empty"));
    }

    if suffix.contains('/') || suffix.contains('\\') {
        return Err(invalid(
            "backup_suffix",
            format!("Path separators not allowed in backup suffix: '{}'", suffix),
        ));
    }

    if suffix.ends_with(&format!(".{}", extension)) {
        return Err(invalid(
            "backup_suffix",
            format!(
                "Backup suffix '{}' would make backups look like .{} wordlists",
                suffix, extension
            ),
        ));
    }

    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::ConfigValidation {
        field: field.to_string(),
        message: message.into(),
    }
}
