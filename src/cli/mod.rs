//! CLI interface for relnotes.
//!
//! There are no subcommands: the binary reads a changeset, resolves every
//! commit it mentions, and writes the enriched release notes.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::changeset;
use crate::github::{resolve_commit, GitHubClient};
use crate::notes;
use crate::utils::token;

/// Repository the notes are generated for when none is given.
const DEFAULT_REPOSITORY: &str = "saleor/saleor-dashboard";

/// relnotes: generate release notes based on a changeset
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "Generate release notes based on a changeset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input file containing changeset text (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file for the release notes (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// GitHub repository in "owner/repo" format
    #[arg(short, long, default_value = DEFAULT_REPOSITORY)]
    pub repo: String,
}

impl Cli {
    /// Executes the end-to-end run: read input, resolve commits, write output.
    pub async fn execute(self) -> Result<()> {
        let changeset_text = self.read_changeset()?;
        if changeset_text.trim().is_empty() {
            anyhow::bail!("No changeset text provided");
        }

        let github_token = token::resolve_token()?;
        let client = GitHubClient::new(github_token)?;

        let release_notes = generate_release_notes(&client, &self.repo, &changeset_text).await?;

        self.write_release_notes(&release_notes)
    }

    /// Reads the changeset from the input file or stdin.
    fn read_changeset(&self) -> Result<String> {
        match &self.input {
            Some(path) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            None => {
                println!("Please paste your changeset text (press Ctrl+D when done):");
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read changeset from stdin")?;
                Ok(text)
            }
        }
    }

    /// Writes the notes to the output file or stdout.
    fn write_release_notes(&self, release_notes: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                fs::write(path, release_notes)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                println!("💾 Release notes written to {}", path.display());
            }
            None => {
                println!("\nGenerated Release Notes:\n");
                println!("{release_notes}");
            }
        }

        Ok(())
    }
}

/// Resolves every commit in the changeset and assembles the report.
///
/// Commits are processed strictly in document order, one request at a time.
/// A commit that cannot be resolved degrades to a placeholder entry; only
/// configuration-level failures abort the run.
pub async fn generate_release_notes(
    client: &GitHubClient,
    repository: &str,
    changeset_text: &str,
) -> Result<String> {
    let commit_hashes = changeset::extract_commit_hashes(changeset_text);
    debug!(
        commits = commit_hashes.len(),
        repository, "resolving changeset commits"
    );

    let mut entries = Vec::with_capacity(commit_hashes.len());
    for commit_hash in &commit_hashes {
        println!("🔄 Processing commit {commit_hash}...");
        match resolve_commit(client, repository, commit_hash).await {
            Ok(Some(resolved)) => entries.push(notes::render_entry(&resolved)),
            Ok(None) => entries.push(notes::render_unresolved(commit_hash)),
            Err(err) => {
                eprintln!("❌ Error fetching data from GitHub: {err}");
                entries.push(notes::render_unresolved(commit_hash));
            }
        }
    }

    Ok(notes::assemble_report(changeset_text, &entries))
}
