//! GitHub REST API client.
//!
//! A thin wrapper over the two endpoints this action needs: reading one
//! issue/PR and posting one comment. The `PullRequestClient` trait is the
//! seam for testing the decision logic without a network.

mod client;
mod error;
#[cfg(test)]
mod mock;
mod pr;

pub use client::GitHubClient;
pub use error::{GitHubError, Result};
#[cfg(test)]
pub use mock::MockPullRequestClient;
pub use pr::{PullRequestClient, PullRequestSnapshot};
