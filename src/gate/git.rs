//! Git plumbing used by the gate.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::gate::StagingArea;

/// Run `git` in `root` and return its stdout.
fn git(root: &Path, args: &[&str]) -> Result<String> {
    tracing::debug!("git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map_err(|e| Error::Git(format!("Failed to run git: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Git(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// The index of the git repository at `root`.
#[derive(Debug, Clone)]
pub struct GitIndex {
    root: PathBuf,
}

impl GitIndex {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory git runs hooks from, honouring `core.hooksPath`.
    pub fn hooks_dir(&self) -> Result<PathBuf> {
        let out = git(&self.root, &["rev-parse", "--git-path", "hooks"])?;
        let dir = PathBuf::from(out.trim());
        Ok(if dir.is_absolute() {
            dir
        } else {
            self.root.join(dir)
        })
    }
}

impl StagingArea for GitIndex {
    fn staged_files(&self) -> Result<Vec<String>> {
        let out = git(
            &self.root,
            &["diff", "--cached", "--name-only", "--diff-filter=ACM", "-z"],
        )?;
        Ok(parse_name_list(&out))
    }
}

/// Split NUL-separated `--name-only -z` output.
fn parse_name_list(out: &str) -> Vec<String> {
    out.split('\0')
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_name_list() {
        assert_eq!(
            parse_name_list("data/a.txt\0data/with space.txt\0"),
            vec!["data/a.txt".to_string(), "data/with space.txt".to_string()]
        );
        assert!(parse_name_list("").is_empty());
    }

    fn git_available() -> bool {
        Command::new("git").arg("--version").output().is_ok()
    }

    fn run_git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(["-c", "user.name=test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .output()
            .unwrap()
            .status;
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_staged_files_lists_added_and_modified() {
        if !git_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data/old.txt"), "old\n").unwrap();
        fs::write(root.join("data/keep.txt"), "keep\n").unwrap();
        run_git(root, &["init", "-q"]);
        run_git(root, &["add", "."]);
        run_git(root, &["commit", "-q", "-m", "initial"]);

        // New content differs from the deleted file, otherwise git reports a
        // rename, which the ACM filter leaves out.
        fs::write(root.join("data/keep.txt"), "keep\nmore\n").unwrap();
        fs::write(root.join("data/new words.txt"), "fresh\n").unwrap();
        run_git(root, &["add", "data/keep.txt", "data/new words.txt"]);
        run_git(root, &["rm", "-q", "data/old.txt"]);

        let staged = GitIndex::new(root).staged_files().unwrap();
        assert_eq!(
            staged,
            vec!["data/keep.txt".to_string(), "data/new words.txt".to_string()]
        );
    }

    #[test]
    fn test_staged_files_empty_index() {
        if !git_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        run_git(dir.path(), &["init", "-q"]);
        assert!(GitIndex::new(dir.path()).staged_files().unwrap().is_empty());
    }

    #[test]
    fn test_outside_repository_is_git_error() {
        if !git_available() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let outside = dir.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        // Stop repository discovery at the temp dir so an enclosing repo is never found.
        std::env::set_var("GIT_CEILING_DIRECTORIES", dir.path());

        let err = GitIndex::new(&outside).staged_files().unwrap_err();
        assert!(matches!(err, Error::Git(_)));
    }
}
