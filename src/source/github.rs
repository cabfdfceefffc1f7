use super::{ContentSource, FetchError, Location, RepoSlug};
use reqwest::blocking::Client;
use reqwest::StatusCode;

const RAW_BASE_URL: &str = "https://raw.githubusercontent.com";

/// Reads files straight from GitHub's raw content host.
pub struct GitHubRaw {
    client: Client,
    base_url: String,
    default_repo: Option<RepoSlug>,
    token: Option<String>,
}

impl GitHubRaw {
    pub fn new(default_repo: Option<RepoSlug>) -> Self {
        Self {
            client: Client::new(),
            base_url: RAW_BASE_URL.to_string(),
            default_repo,
            token: std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }

    /// Point at a different host, e.g. a GitHub Enterprise raw endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn url_for(&self, repo: &RepoSlug, git_ref: Option<&str>, path: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.base_url,
            repo.owner,
            repo.repo,
            git_ref.unwrap_or("HEAD"),
            path.trim_start_matches('/')
        )
    }
}

impl ContentSource for GitHubRaw {
    fn fetch(&self, path: &str, location: &Location<'_>) -> Result<Option<String>, FetchError> {
        let repo = location
            .repo
            .or(self.default_repo.as_ref())
            .ok_or_else(|| FetchError::NoRemote {
                path: path.to_string(),
            })?;

        let url = self.url_for(repo, location.git_ref, path);
        log::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let transport = |message: String| FetchError::Transport {
            path: format!("{}@{}", repo, path),
            message,
        };

        let response = request.send().map_err(|e| transport(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(transport(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .map(Some)
            .map_err(|e| transport(e.to_string()))
    }
}
