//! Trait-level mock client for testing the notifier without a network.

use std::sync::{Arc, Mutex};

use super::error::{GitHubError, Result};
use super::pr::{PullRequestClient, PullRequestSnapshot};

/// Recorded `create_comment` call: (owner, repo, number, body).
pub type PostedComment = (String, String, u64, String);

/// Mock implementation backed by in-memory state.
#[derive(Clone, Default)]
pub struct MockPullRequestClient {
    /// Labels returned by `fetch_pr`.
    pub labels: Arc<Mutex<Vec<String>>>,
    /// Error to return from the next `fetch_pr` call.
    pub fetch_error: Arc<Mutex<Option<GitHubError>>>,
    /// Error to return from the next `create_comment` call.
    pub write_error: Arc<Mutex<Option<GitHubError>>>,
    /// Comments posted so far (for assertions).
    pub posted_comments: Arc<Mutex<Vec<PostedComment>>>,
}

impl MockPullRequestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(self, labels: &[&str]) -> Self {
        *self.labels.lock().unwrap() = labels.iter().map(|l| (*l).to_owned()).collect();
        self
    }

    pub fn with_fetch_error(self, error: GitHubError) -> Self {
        *self.fetch_error.lock().unwrap() = Some(error);
        self
    }

    pub fn with_write_error(self, error: GitHubError) -> Self {
        *self.write_error.lock().unwrap() = Some(error);
        self
    }
}

#[async_trait::async_trait]
impl PullRequestClient for MockPullRequestClient {
    async fn fetch_pr(
        &self,
        _owner: &str,
        _repo: &str,
        _number: u64,
    ) -> Result<PullRequestSnapshot> {
        if let Some(err) = self.fetch_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(PullRequestSnapshot {
            labels: self.labels.lock().unwrap().clone(),
        })
    }

    async fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<()> {
        if let Some(err) = self.write_error.lock().unwrap().take() {
            return Err(err);
        }
        self.posted_comments.lock().unwrap().push((
            owner.to_owned(),
            repo.to_owned(),
            number,
            body.to_owned(),
        ));
        Ok(())
    }
}
