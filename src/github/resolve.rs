//! Commit-to-pull-request resolution.
//!
//! Finding the PR that introduced a commit is a heuristic. Merge commits
//! usually carry a `#<number>` reference in the message; squashed commits
//! often do not, and the commit→pulls association endpoint tends to return
//! the bundling release PR instead of the original one. The chain below
//! tries the cheapest, most precise strategy first and degrades from there:
//!
//! 1. a `#<number>` reference in the commit message,
//! 2. a search for PRs mentioning the hash (oldest first, release PRs
//!    filtered out),
//! 3. the commit→pulls association endpoint, with the same filter — but if
//!    every candidate looks like a release PR, the first one is accepted
//!    anyway.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::github::client::GitHubClient;
use crate::github::error::GitHubError;
use crate::github::types::{CommitDetail, PullRequest};
use crate::notes::parse_co_authors;

/// Titles containing any of these are assumed to belong to bundling release
/// PRs rather than the PR that introduced the change. Best-effort only.
const RELEASE_KEYWORDS: &[&str] = &["release", "changeset", "version bump", "bump version"];

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static PR_REFERENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\d+)").unwrap());

/// Everything the report needs to know about one resolved commit.
#[derive(Debug, Clone)]
pub struct ResolvedCommit {
    /// The hash as it appeared in the changeset.
    pub commit_hash: String,
    /// Commit author identity (GitHub login preferred, else display name).
    pub author: String,
    /// Co-author identities in commit message order.
    pub co_authors: Vec<String>,
    /// Number of the resolved PR, when one was found.
    pub pr_number: Option<u64>,
    /// Body of the resolved PR.
    pub pr_body: Option<String>,
    /// Identity of the account that opened the resolved PR.
    pub pr_author: Option<String>,
}

/// Resolves a commit hash to its original pull request.
///
/// Returns `Ok(None)` when the commit itself does not exist in the
/// repository. A commit that exists but has no findable PR still resolves,
/// with the PR fields empty. Errors are only returned for failures on the
/// initial commit lookup; failures inside the fallback chain degrade to the
/// next strategy.
pub async fn resolve_commit(
    client: &GitHubClient,
    repository: &str,
    commit_hash: &str,
) -> Result<Option<ResolvedCommit>, GitHubError> {
    let commit = match client.get_commit(repository, commit_hash).await {
        Ok(commit) => commit,
        Err(GitHubError::CommitNotFound(_)) => {
            println!("❓ Commit {commit_hash} not found in repository {repository}");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let mut resolved = ResolvedCommit {
        commit_hash: commit_hash.to_string(),
        author: commit_author_identity(&commit),
        co_authors: parse_co_authors(&commit.commit.message),
        pr_number: None,
        pr_body: None,
        pr_author: None,
    };

    if let Some(pr) = find_pull_request(client, repository, commit_hash, &commit).await {
        debug!(number = pr.number, "resolved commit to pull request");
        resolved.pr_number = Some(pr.number);
        resolved.pr_author = pr.user.map(|user| format!("@{}", user.login));
        resolved.pr_body = pr.body;
    }

    Ok(Some(resolved))
}

/// Runs the fallback chain against an already-fetched commit.
async fn find_pull_request(
    client: &GitHubClient,
    repository: &str,
    commit_hash: &str,
    commit: &CommitDetail,
) -> Option<PullRequest> {
    // 1. A `#<number>` token in the message points straight at the PR.
    if let Some(number) = find_pr_reference(&commit.commit.message) {
        debug!(number, "commit message references a pull request");
        match client.get_pull_request(repository, number).await {
            Ok(pr) => return Some(pr),
            Err(err) => debug!(%err, "referenced pull request could not be fetched"),
        }
    }

    // 2. Search for PRs mentioning the hash; the earliest non-release hit is
    //    the most likely original.
    match client.search_pull_requests(repository, commit_hash).await {
        Ok(results) => {
            let candidate = results.items.iter().find(|item| !is_release_pr(&item.title));
            if let Some(item) = candidate {
                match client.get_pull_request(repository, item.number).await {
                    Ok(pr) => return Some(pr),
                    Err(err) => debug!(%err, "search result could not be fetched"),
                }
            }
        }
        Err(err) => debug!(%err, "pull request search failed"),
    }

    // 3. Association endpoint, last resort. An all-release candidate list is
    //    accepted anyway: the filter is best-effort and a release PR beats
    //    nothing.
    match client.pull_requests_for_commit(repository, commit_hash).await {
        Ok(pulls) => {
            if let Some(pr) = pulls.iter().find(|pr| !is_release_pr(&pr.title)) {
                return Some(pr.clone());
            }
            if let Some(pr) = pulls.into_iter().next() {
                println!(
                    "⚠️  Only release pull requests reference commit {commit_hash}; accepting PR #{} anyway",
                    pr.number
                );
                return Some(pr);
            }
        }
        Err(err) => debug!(%err, "commit association lookup failed"),
    }

    None
}

/// Author identity for the contributors line: GitHub login when the account
/// mapping exists, else the display name recorded in the commit.
fn commit_author_identity(commit: &CommitDetail) -> String {
    if let Some(user) = &commit.author {
        return format!("@{}", user.login);
    }

    commit
        .commit
        .author
        .as_ref()
        .and_then(|author| author.name.clone())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Extracts the first `#<number>` pull request reference from a message.
fn find_pr_reference(message: &str) -> Option<u64> {
    PR_REFERENCE_PATTERN
        .captures(message)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns whether a PR title looks like a bundling release PR.
fn is_release_pr(title: &str) -> bool {
    let title = title.to_lowercase();
    RELEASE_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword))
}
