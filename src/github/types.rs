//! GitHub REST API wire types.
//!
//! Only the fields this tool consumes are declared; unknown fields in the
//! responses are ignored during deserialization.

use serde::Deserialize;

/// A user account attached to a commit or pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// GitHub login name.
    pub login: String,
}

/// Author block inside the git commit payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GitAuthor {
    /// Display name as recorded in the commit.
    pub name: Option<String>,
}

/// Inner `commit` object of a commit detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    /// Full commit message, including any trailer lines.
    #[serde(default)]
    pub message: String,
    /// Author identity recorded in the commit itself.
    pub author: Option<GitAuthor>,
}

/// Response of `GET /repos/{owner}/{repo}/commits/{sha}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// Full SHA of the commit.
    pub sha: String,
    /// The underlying git commit data.
    pub commit: GitCommit,
    /// GitHub account of the author, when GitHub could map it.
    pub author: Option<User>,
}

/// Response of `GET /repos/{owner}/{repo}/pulls/{number}`.
///
/// The commit→pulls association endpoint returns a list of the same shape.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// PR number.
    pub number: u64,
    /// PR title.
    #[serde(default)]
    pub title: String,
    /// PR description; GitHub sends `null` for empty bodies.
    pub body: Option<String>,
    /// Account that opened the PR.
    pub user: Option<User>,
}

/// A single hit of the issue search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    /// Issue or PR number.
    pub number: u64,
    /// Title at search time.
    #[serde(default)]
    pub title: String,
}

/// Response of `GET /search/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Matching issues and PRs, in the requested sort order.
    #[serde(default)]
    pub items: Vec<SearchItem>,
}
