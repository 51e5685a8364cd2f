//! Pull request operations.

use super::client::GitHubClient;
use super::error::{GitHubError, Result};

/// Read-only view of a pull request, fetched once per run.
#[derive(Debug, Clone, Default)]
pub struct PullRequestSnapshot {
    /// Label names currently attached to the PR. Unordered; only consulted
    /// for membership.
    pub labels: Vec<String>,
}

/// Trait for the two remote operations this action performs.
#[async_trait::async_trait]
pub trait PullRequestClient: Send + Sync {
    /// Fetch the current state of a pull request.
    async fn fetch_pr(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequestSnapshot>;

    /// Post a comment on a pull request.
    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<()>;
}

#[async_trait::async_trait]
impl PullRequestClient for GitHubClient {
    async fn fetch_pr(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequestSnapshot> {
        self.get_issue(owner, repo, number)
            .await
            .map_err(|cause| GitHubError::Fetch {
                owner: owner.to_owned(),
                repo: repo.to_owned(),
                number,
                cause,
            })
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<()> {
        self.post_comment(owner, repo, number, body)
            .await
            .map_err(|cause| GitHubError::Write {
                owner: owner.to_owned(),
                repo: repo.to_owned(),
                number,
                cause,
            })
    }
}
