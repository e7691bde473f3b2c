use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::ApiConfig;
use crate::domain::{Project, Release};
use crate::error::{Result, TryReleaseError};
use crate::release::ReleaseSource;

const USER_AGENT: &str = concat!("tryrelease/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Release source backed by the GitHub REST API.
///
/// Issues exactly one `GET /repos/{owner}/{repo}/releases/latest` per lookup,
/// bounded by the client timeout. No retries.
#[derive(Debug, Clone)]
pub struct GitHubReleases {
    client: Client,
    base_url: String,
    timeout: Duration,
    token: Option<String>,
}

impl GitHubReleases {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        token: Option<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| TryReleaseError::request(e.to_string()))?;

        Ok(GitHubReleases {
            client,
            base_url: base_url.into(),
            timeout,
            token,
        })
    }

    pub fn from_config(api: &ApiConfig) -> Result<Self> {
        Self::new(api.base_url.clone(), api.timeout(), api.token())
    }

    /// API endpoint for the latest release of `owner/repo`
    pub fn latest_release_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.base_url.trim_end_matches('/'),
            owner,
            repo
        )
    }

    fn classify(&self, err: reqwest::Error) -> TryReleaseError {
        if err.is_timeout() {
            TryReleaseError::Timeout(self.timeout.as_secs())
        } else if err.is_builder() {
            TryReleaseError::request(err.to_string())
        } else {
            TryReleaseError::Transport(err)
        }
    }
}

impl ReleaseSource for GitHubReleases {
    fn latest_tag(&self, owner: &str, repo: &str) -> Result<String> {
        if owner.trim().is_empty() || repo.trim().is_empty() {
            return Err(TryReleaseError::request("owner and repo must not be empty"));
        }

        let url = self.latest_release_url(owner, repo);
        debug!(%url, "fetching latest release");

        let mut request = self.client.get(&url).header(ACCEPT, GITHUB_JSON);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| self.classify(e))?;
        let status = response.status();
        debug!(status = status.as_u16(), "release API responded");

        if status == StatusCode::NOT_FOUND {
            return Err(TryReleaseError::NotFound(
                Project::new(owner, repo).human_url(),
            ));
        }
        if !status.is_success() {
            return Err(TryReleaseError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().map_err(|e| self.classify(e))?;
        let release: Release =
            serde_json::from_str(&body).map_err(|e| TryReleaseError::parse(e.to_string()))?;

        let tag = release.tag().ok_or(TryReleaseError::MissingTag)?;
        debug!(tag, "decoded latest release");
        Ok(tag.to_string())
    }
}
