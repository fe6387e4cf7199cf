//! Backup copies of wordlists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};

/// Copy `path` byte-for-byte to its backup location, overwriting any older backup.
///
/// Returns the backup path.
pub fn create_backup(config: &Config, path: &Path) -> Result<PathBuf> {
    let backup = config.backup_path(path);
    fs::copy(path, &backup).map_err(|source| Error::Write {
        path: backup.clone(),
        source,
    })?;

    tracing::debug!("Backup created: {}", backup.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_root(dir.path());
        let path = dir.path().join("words.txt");
        let original = b"cat\r\n  Dog \n\n\xe2\x9c\x93 check";
        fs::write(&path, original).unwrap();

        let backup = create_backup(&config, &path).unwrap();
        assert_eq!(backup, dir.path().join("words.txt.bak"));
        assert_eq!(fs::read(&backup).unwrap(), original);
    }

    #[test]
    fn test_backup_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::for_root(dir.path());
        let path = dir.path().join("words.txt");
        fs::write(config.backup_path(&path), "stale").unwrap();
        fs::write(&path, "fresh\n").unwrap();

        let backup = create_backup(&config, &path).unwrap();
        assert_eq!(fs::read_to_string(backup).unwrap(), "fresh\n");
    }
}
