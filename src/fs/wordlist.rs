//! Reading and writing wordlist files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a wordlist as UTF-8 text.
pub fn read_wordlist(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace a wordlist's content.
pub fn write_wordlist(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
