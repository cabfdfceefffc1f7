use super::{ContentSource, FetchError, GitHubRaw, Location};
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Reads the repository under review from a working tree on disk.
///
/// Requests for another repository go to the remote source, if any.
pub struct LocalCheckout {
    root: PathBuf,
    remote: Option<GitHubRaw>,
}

impl LocalCheckout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: GitHubRaw) -> Self {
        self.remote = Some(remote);
        self
    }
}

impl ContentSource for LocalCheckout {
    fn fetch(&self, path: &str, location: &Location<'_>) -> Result<Option<String>, FetchError> {
        if location.repo.is_some() {
            return match &self.remote {
                Some(remote) => remote.fetch(path, location),
                None => Err(FetchError::NoRemote {
                    path: path.to_string(),
                }),
            };
        }

        // The checkout is already at the head ref, so `git_ref` is not consulted.
        let full_path = self.root.join(path);
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FetchError::Transport {
                path: full_path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }
}

/// Added and modified paths between `base` and the working tree.
pub fn changed_files_from_git(working_dir: &Path, base: &str) -> Result<Vec<String>> {
    let output = Command::new("git")
        .arg("diff")
        .arg("--name-only")
        .arg("--diff-filter=AM")
        .arg(base)
        .current_dir(working_dir)
        .output()
        .context("Failed to run git diff")?;

    if !output.status.success() {
        anyhow::bail!(
            "git diff against '{}' failed: {}",
            base,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let paths = String::from_utf8(output.stdout)
        .context("git diff returned non UTF-8 paths")?
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RepoSlug;
    use tempfile::tempdir;

    #[test]
    fn test_reads_files_relative_to_root() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/guide.md"), "hello").unwrap();

        let source = LocalCheckout::new(dir.path());
        let content = source.fetch("docs/guide.md", &Location::default()).unwrap();
        assert_eq!(content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempdir().unwrap();
        let source = LocalCheckout::new(dir.path());
        assert!(source
            .fetch("spellcheck.json", &Location::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_other_repository_without_remote() {
        let dir = tempdir().unwrap();
        let source = LocalCheckout::new(dir.path());
        let repo: RepoSlug = "orta/words".parse().unwrap();
        let location = Location {
            repo: Some(&repo),
            git_ref: None,
        };
        assert!(matches!(
            source.fetch("words.json", &location),
            Err(FetchError::NoRemote { .. })
        ));
    }
}
