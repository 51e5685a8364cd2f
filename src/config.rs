//! Environment-based configuration for a single action run.
//!
//! Every input is a hard precondition: resolution either yields a value or
//! a `ConfigError` that the entry point turns into a fatal log line. Action
//! inputs arrive as `INPUT_*` variables; the `GITHUB_*` variables are the
//! runner-provided fallbacks.

use std::str::FromStr;

use thiserror::Error;

use crate::workflow_log;

const TOKEN_VAR: &str = "INPUT_TOKEN";
const DEFAULT_TOKEN_VAR: &str = "GITHUB_TOKEN";
const REPOSITORY_VAR: &str = "INPUT_REPOSITORY";
const DEFAULT_REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";
const PULL_REQUEST_VAR: &str = "INPUT_PULL_REQUEST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Did not find {TOKEN_VAR} or {DEFAULT_TOKEN_VAR}. Required for authentication")]
    MissingToken,

    #[error("repository input required ({REPOSITORY_VAR} or {DEFAULT_REPOSITORY_VAR})")]
    MissingRepository,

    #[error("Expected repository name to be of the form <owner>/<repo>, got '{0}'")]
    MalformedRepository(String),

    #[error("pull_request input required ({PULL_REQUEST_VAR})")]
    MissingPullRequest,

    #[error("pull_request input must be an integer, got '{0}'")]
    InvalidPullRequest(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// An `owner`/`name` pair identifying a repository on the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoCoordinates {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: (*owner).to_owned(),
                name: (*name).to_owned(),
            }),
            _ => Err(ConfigError::MalformedRepository(s.to_owned())),
        }
    }
}

/// All inputs of one run, resolved up front.
#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub token: String,
    pub repository: RepoCoordinates,
    pub pr_number: u64,
}

impl ActionConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token: resolve_token()?,
            repository: resolve_repository()?,
            pr_number: resolve_pr_number()?,
        })
    }
}

/// Scan an ordered fallback chain of variable names, stopping at the first
/// whose value is non-blank. Returns the supplying variable name alongside
/// the raw (untrimmed) value.
fn first_non_blank(vars: &[&'static str]) -> Option<(&'static str, String)> {
    vars.iter().find_map(|name| {
        let value = std::env::var(name).ok()?;
        if value.trim().is_empty() {
            None
        } else {
            Some((*name, value))
        }
    })
}

/// Resolve the bearer token, preferring the explicit `token` input over the
/// runner-provided default.
pub fn resolve_token() -> Result<String> {
    let (source, token) =
        first_non_blank(&[TOKEN_VAR, DEFAULT_TOKEN_VAR]).ok_or(ConfigError::MissingToken)?;
    workflow_log::debug(&format!("Using {source} for authentication"));
    Ok(token)
}

/// Resolve the target repository, preferring the explicit `repository` input
/// over the runner-provided default.
pub fn resolve_repository() -> Result<RepoCoordinates> {
    let (_, raw) = first_non_blank(&[REPOSITORY_VAR, DEFAULT_REPOSITORY_VAR])
        .ok_or(ConfigError::MissingRepository)?;
    raw.parse()
}

/// Resolve the pull request number from the `pull_request` input.
pub fn resolve_pr_number() -> Result<u64> {
    let (_, raw) =
        first_non_blank(&[PULL_REQUEST_VAR]).ok_or(ConfigError::MissingPullRequest)?;
    raw.parse().map_err(|_| ConfigError::InvalidPullRequest(raw))
}
