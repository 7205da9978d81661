//! # relnotes
//!
//! Turns a changeset log into human-readable release notes by resolving each
//! commit hash to the pull request that introduced it on GitHub, then
//! appending the PR descriptions and contributor credits to the original
//! changeset text.
//!
//! The interesting part is the resolution heuristic in [`github::resolve`]:
//! a chain of fallback strategies that tries to find the *original* PR
//! behind a commit rather than the bundling release PR.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod changeset;
pub mod cli;
pub mod github;
pub mod notes;
pub mod utils;

pub use crate::cli::Cli;

/// The current version of relnotes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
