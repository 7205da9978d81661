//! GitHub REST API client.
//!
//! A thin wrapper over `reqwest` that carries the bearer token, knows the
//! handful of endpoints the resolver needs, and transparently waits out
//! primary rate limits.

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::github::error::GitHubError;
use crate::github::types::{CommitDetail, PullRequest, SearchResults};

/// Default GitHub REST API base.
const DEFAULT_API_BASE: &str = "https://api.github.com/";

/// Media type GitHub asks REST clients to send.
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// User agent sent with every request; GitHub rejects anonymous clients.
const USER_AGENT: &str = concat!("relnotes/", env!("CARGO_PKG_VERSION"));

/// GitHub client holding the credential for all requests.
///
/// The token is an explicitly passed value, not ambient state; construct the
/// client once and thread it through the run.
pub struct GitHubClient {
    client: Client,
    token: String,
    api_base: Url,
}

impl GitHubClient {
    /// Creates a new client from an explicit token.
    pub fn new(token: String) -> Result<Self> {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Creates a client against a non-default API base.
    ///
    /// Integration tests point this at a local mock server.
    pub fn with_api_base(token: String, api_base: &str) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(GitHubError::TokenNotFound.into());
        }

        let api_base = Url::parse(api_base)
            .with_context(|| format!("Invalid GitHub API base URL: {api_base}"))?;

        Ok(Self {
            client: Client::new(),
            token,
            api_base,
        })
    }

    /// Fetches commit detail for a hash.
    ///
    /// A 404 maps to [`GitHubError::CommitNotFound`], which callers treat as
    /// "skip this commit entirely".
    pub async fn get_commit(
        &self,
        repository: &str,
        commit_hash: &str,
    ) -> Result<CommitDetail, GitHubError> {
        let url = self.endpoint(&format!("repos/{repository}/commits/{commit_hash}"))?;
        let response = self.get(url).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::CommitNotFound(commit_hash.to_string()));
        }

        Self::decode(response).await
    }

    /// Fetches a pull request by number.
    pub async fn get_pull_request(
        &self,
        repository: &str,
        number: u64,
    ) -> Result<PullRequest, GitHubError> {
        let url = self.endpoint(&format!("repos/{repository}/pulls/{number}"))?;
        let response = self.get(url).await?;
        Self::decode(response).await
    }

    /// Searches pull requests mentioning a commit hash, oldest first.
    pub async fn search_pull_requests(
        &self,
        repository: &str,
        commit_hash: &str,
    ) -> Result<SearchResults, GitHubError> {
        let mut url = self.endpoint("search/issues")?;
        url.query_pairs_mut()
            .append_pair("q", &format!("{commit_hash} repo:{repository} type:pr"))
            .append_pair("sort", "created")
            .append_pair("order", "asc");

        let response = self.get(url).await?;
        Self::decode(response).await
    }

    /// Lists pull requests associated with a commit.
    pub async fn pull_requests_for_commit(
        &self,
        repository: &str,
        commit_hash: &str,
    ) -> Result<Vec<PullRequest>, GitHubError> {
        let url = self.endpoint(&format!("repos/{repository}/commits/{commit_hash}/pulls"))?;
        let response = self.get(url).await?;
        Self::decode(response).await
    }

    /// Issues a GET request, waiting out rate-limit responses.
    ///
    /// GitHub signals its primary rate limit with a 403 or 429 status and a
    /// "rate limit" marker in the body; the reset time comes back in the
    /// `X-RateLimit-Reset` header as a unix timestamp. The wait-and-retry
    /// loop has no retry cap.
    async fn get(&self, url: Url) -> Result<Response, GitHubError> {
        loop {
            debug!(%url, "GET");
            let response = self
                .client
                .get(url.clone())
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Accept", GITHUB_ACCEPT)
                .header("User-Agent", USER_AGENT)
                .send()
                .await
                .map_err(|e| GitHubError::NetworkError(e.to_string()))?;

            let status = response.status();
            if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
                let reset = rate_limit_reset(&response);
                let body = response
                    .text()
                    .await
                    .map_err(|e| GitHubError::NetworkError(e.to_string()))?;

                if is_rate_limited(&body) {
                    let wait = wait_seconds(reset, Utc::now().timestamp());
                    if wait > 0 {
                        println!("⏳ Rate limit exceeded. Waiting for {wait} seconds...");
                        tokio::time::sleep(std::time::Duration::from_secs(wait)).await;
                    }
                    continue;
                }

                return Err(GitHubError::RequestFailed(format!("HTTP {status}: {body}")));
            }

            return Ok(response);
        }
    }

    /// Resolves an endpoint path against the API base.
    fn endpoint(&self, path: &str) -> Result<Url, GitHubError> {
        self.api_base
            .join(path)
            .map_err(|e| GitHubError::RequestFailed(format!("invalid endpoint {path}: {e}")))
    }

    /// Checks the status and decodes a JSON response body.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GitHubError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GitHubError::RequestFailed(format!("HTTP {status}: {body}")));
        }

        response
            .json()
            .await
            .map_err(|e| GitHubError::InvalidResponseFormat(e.to_string()))
    }
}

/// Returns whether an error body carries GitHub's rate-limit marker.
fn is_rate_limited(body: &str) -> bool {
    body.to_lowercase().contains("rate limit")
}

/// Reads the `X-RateLimit-Reset` header as a unix timestamp, defaulting to 0.
fn rate_limit_reset(response: &Response) -> i64 {
    response
        .headers()
        .get("X-RateLimit-Reset")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

/// Seconds to wait until the rate limit resets, clamped to non-negative.
fn wait_seconds(reset: i64, now: i64) -> u64 {
    u64::try_from(reset - now).unwrap_or(0)
}
