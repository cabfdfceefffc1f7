use crate::source::RepoSlug;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A settings file in another repository, written `owner/repo@path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsReference {
    pub repo: RepoSlug,
    pub path: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsReferenceError {
    #[error("could not make a repo + file from `{0}`: expected `owner/repo@path`")]
    MissingSeparator(String),

    #[error("could not read a repository from `{0}`: expected `owner/repo@path`")]
    InvalidRepository(String),

    #[error("no settings file path given in `{0}`")]
    MissingPath(String),
}

impl FromStr for SettingsReference {
    type Err = SettingsReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (repo, path) = s
            .split_once('@')
            .ok_or_else(|| SettingsReferenceError::MissingSeparator(s.to_string()))?;

        let repo: RepoSlug = repo
            .parse()
            .map_err(|_| SettingsReferenceError::InvalidRepository(s.to_string()))?;

        if path.trim().is_empty() {
            return Err(SettingsReferenceError::MissingPath(s.to_string()));
        }

        Ok(SettingsReference {
            repo,
            path: path.to_string(),
        })
    }
}

impl fmt::Display for SettingsReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.repo, self.path)
    }
}
