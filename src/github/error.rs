//! GitHub-specific error handling.

use thiserror::Error;

/// GitHub API specific errors.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// No usable token in the environment, settings, or prompt.
    #[error("GitHub token is required to access the GitHub API. Set the GITHUB_TOKEN environment variable")]
    TokenNotFound,

    /// The commit does not exist in the target repository.
    #[error("commit {0} not found")]
    CommitNotFound(String),

    /// GitHub API request failed with a non-success status.
    #[error("GitHub API request failed: {0}")]
    RequestFailed(String),

    /// Response body did not match the expected shape.
    #[error("Invalid response format from GitHub API: {0}")]
    InvalidResponseFormat(String),

    /// Network connectivity error.
    #[error("Network error: {0}")]
    NetworkError(String),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
