//! reqwest-based GitHub API client.

use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::json;

use super::error::{GitHubError, Result};
use super::pr::PullRequestSnapshot;

const GITHUB_API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Issue payload from `GET /repos/{owner}/{repo}/issues/{number}`.
///
/// Pull requests are issues on the REST API, so the issues endpoint works
/// for both. Only the labels are decoded; everything else is ignored.
#[derive(Debug, Deserialize)]
struct Issue {
    labels: Vec<Label>,
}

#[derive(Debug, Deserialize)]
struct Label {
    name: String,
}

/// Production GitHub client authenticated with a bearer token.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE_URL, token)
    }

    /// Create a client against an arbitrary base URL (used by tests to
    /// point at a mock server).
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(GitHubError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub(super) async fn get_issue(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> anyhow::Result<PullRequestSnapshot> {
        let url = format!("{}/repos/{owner}/{repo}/issues/{number}", self.base_url);
        let issue: Issue = self
            .http
            .get(&url)
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("GitHub API returned an error")?
            .json()
            .await
            .context("invalid response body")?;

        Ok(PullRequestSnapshot {
            labels: issue.labels.into_iter().map(|l| l.name).collect(),
        })
    }

    pub(super) async fn post_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> anyhow::Result<()> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{number}/comments",
            self.base_url
        );
        self.http
            .post(&url)
            .json(&json!({ "body": body }))
            .send()
            .await
            .context("request failed")?
            .error_for_status()
            .context("GitHub API returned an error")?;

        Ok(())
    }
}
