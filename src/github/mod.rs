//! GitHub REST API access and commit-to-PR resolution.

pub mod client;
pub mod error;
pub mod resolve;
pub mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use resolve::{resolve_commit, ResolvedCommit};
