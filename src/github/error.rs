//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Invalid authentication token: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Failed to get PR {number} in {owner}/{repo}: {cause:#}")]
    Fetch {
        owner: String,
        repo: String,
        number: u64,
        cause: anyhow::Error,
    },

    #[error("Failed to create comment on PR {number} in {owner}/{repo}: {cause:#}")]
    Write {
        owner: String,
        repo: String,
        number: u64,
        cause: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn fetch_error_names_the_pull_request() {
        let err = GitHubError::Fetch {
            owner: "octocat".to_owned(),
            repo: "hello-world".to_owned(),
            number: 42,
            cause: anyhow!("connection refused"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to get PR 42 in octocat/hello-world: connection refused"
        );
    }

    #[test]
    fn write_error_names_the_pull_request() {
        let err = GitHubError::Write {
            owner: "octocat".to_owned(),
            repo: "hello-world".to_owned(),
            number: 42,
            cause: anyhow!("boom"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to create comment on PR 42 in octocat/hello-world: boom"
        );
    }
}
