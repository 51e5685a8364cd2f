//! Label-gated comment posting: the decision logic of the action.

use crate::config::RepoCoordinates;
use crate::github::{PullRequestClient, PullRequestSnapshot, Result};
use crate::workflow_log;

/// Returns true iff the snapshot carries `marker_label`.
///
/// Exact, case-sensitive comparison; no normalization.
pub fn is_marked(snapshot: &PullRequestSnapshot, marker_label: &str) -> bool {
    snapshot.labels.iter().any(|label| label == marker_label)
}

/// Fetch the PR, and post `comment` on it iff it carries `marker_label`.
///
/// The unlabeled case is a success with no side effect. The write is only
/// attempted after the read completes; a failed write is not rolled back.
pub async fn run(
    client: &dyn PullRequestClient,
    repo: &RepoCoordinates,
    pr_number: u64,
    marker_label: &str,
    comment: &str,
) -> Result<()> {
    let snapshot = client.fetch_pr(&repo.owner, &repo.name, pr_number).await?;

    if !is_marked(&snapshot, marker_label) {
        workflow_log::debug(&format!(
            "PR {pr_number} in {}/{} is not labeled with marker label '{marker_label}'",
            repo.owner, repo.name
        ));
        return Ok(());
    }

    client
        .create_comment(&repo.owner, &repo.name, pr_number, comment)
        .await?;
    workflow_log::debug(&format!(
        "Successfully commented '{comment}' on PR {pr_number} in {}/{}",
        repo.owner, repo.name
    ));

    Ok(())
}
