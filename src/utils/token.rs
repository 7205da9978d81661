//! GitHub token acquisition.
//!
//! Lookup order: `GITHUB_TOKEN` in the environment, the settings-file
//! fallback, then an interactive prompt. An empty answer is fatal.

use std::io::{self, Write};

use anyhow::Result;

use crate::github::GitHubError;
use crate::utils::settings;

/// Environment variable holding the GitHub API token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Resolves the GitHub token to pass into the client.
pub fn resolve_token() -> Result<String> {
    if let Ok(token) = settings::get_env_var(TOKEN_ENV_VAR) {
        return Ok(token);
    }

    prompt_for_token()
}

/// Asks the user to type a token on stdin.
fn prompt_for_token() -> Result<String> {
    print!("Please enter your GitHub token: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let token = input.trim().to_string();

    if token.is_empty() {
        return Err(GitHubError::TokenNotFound.into());
    }

    Ok(token)
}
