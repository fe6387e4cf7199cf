//! Pre-commit hook installation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Script written to `.git/hooks/pre-commit`.
pub const HOOK_SCRIPT: &str = "#!/bin/sh\n\
# Installed by wordlist-dedup: block commits with duplicate wordlist entries.\n\
exec wordlist-dedup hook\n";

/// Write the pre-commit hook into `hooks_dir`.
///
/// An existing hook is only replaced when `force` is set.
pub fn install_hook(hooks_dir: &Path, force: bool) -> Result<PathBuf> {
    let path = hooks_dir.join("pre-commit");
    if path.exists() && !force {
        return Err(Error::HookExists(path));
    }

    fs::create_dir_all(hooks_dir)?;
    fs::write(&path, HOOK_SCRIPT).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    make_executable(&path)?;

    tracing::info!("Installed pre-commit hook at {}", path.display());
    Ok(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
