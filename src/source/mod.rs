pub mod github;
pub mod local;

pub use github::GitHubRaw;
pub use local::LocalCheckout;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoSlug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoSlug {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(format!("expected OWNER/REPO, got '{}'", s)),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Where to read a file from. `repo: None` means the repository under review.
#[derive(Debug, Clone, Copy, Default)]
pub struct Location<'a> {
    pub repo: Option<&'a RepoSlug>,
    pub git_ref: Option<&'a str>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {path} failed: {message}")]
    Transport { path: String, message: String },

    #[error("no remote source configured for {path}")]
    NoRemote { path: String },
}

/// Reads file contents. `Ok(None)` means the file does not exist.
pub trait ContentSource: Send + Sync {
    fn fetch(&self, path: &str, location: &Location<'_>) -> Result<Option<String>, FetchError>;
}
