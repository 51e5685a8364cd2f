mod config;
mod github;
mod notifier;
mod workflow_log;

use config::ActionConfig;
use github::GitHubClient;

/// Label that gates the approval comment.
const MARKER_LABEL: &str = "dependencies";

/// Comment that instructs bors to merge the PR.
const APPROVE_COMMENT: &str = "bors r+";

#[tokio::main]
async fn main() {
    let config = match ActionConfig::from_env() {
        Ok(config) => config,
        Err(err) => workflow_log::fatal(&err.to_string()),
    };

    let client = match GitHubClient::new(&config.token) {
        Ok(client) => client,
        Err(err) => workflow_log::fatal(&err.to_string()),
    };

    if let Err(err) = notifier::run(
        &client,
        &config.repository,
        config.pr_number,
        MARKER_LABEL,
        APPROVE_COMMENT,
    )
    .await
    {
        workflow_log::fatal(&format!("Failed to run action: {err}"));
    }
}
