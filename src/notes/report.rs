//! Release note rendering.
//!
//! The report echoes the original changeset text, then appends one entry per
//! commit in input order, separated by blank lines.

use crate::github::ResolvedCommit;
use crate::notes::contributors::contributor_list;

/// Sentence emitted when a commit resolved but no PR description was found.
const NO_DESCRIPTION: &str = "No pull request description found.";

/// Renders one release note entry for a resolved commit.
pub fn render_entry(resolved: &ResolvedCommit) -> String {
    let mut entry = match resolved.pr_number {
        Some(number) => format!("Commit {} (PR #{number}):\n", resolved.commit_hash),
        None => format!("Commit {}:\n", resolved.commit_hash),
    };

    let contributors = contributor_list(
        &resolved.author,
        resolved.pr_author.as_deref(),
        &resolved.co_authors,
    );
    entry.push_str("Contributors: ");
    entry.push_str(&contributors.join(", "));
    entry.push('\n');

    match resolved
        .pr_body
        .as_deref()
        .filter(|body| !body.trim().is_empty())
    {
        Some(body) => {
            entry.push_str(body.trim_end());
            entry.push('\n');
        }
        None => {
            entry.push_str(NO_DESCRIPTION);
            entry.push('\n');
        }
    }

    entry
}

/// Renders the line used when a commit could not be resolved at all.
pub fn render_unresolved(commit_hash: &str) -> String {
    format!("Commit {commit_hash}: could not retrieve information.\n")
}

/// Assembles the final report: original changeset text, a blank separator,
/// then the entries in input order.
pub fn assemble_report(changeset_text: &str, entries: &[String]) -> String {
    let mut report = String::from(changeset_text);
    report.push_str("\n\n");

    for entry in entries {
        report.push_str(entry);
        report.push('\n');
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(pr_number: Option<u64>, pr_body: Option<&str>) -> ResolvedCommit {
        ResolvedCommit {
            commit_hash: "abc1234".to_string(),
            author: "@alice".to_string(),
            co_authors: vec!["@bob".to_string()],
            pr_number,
            pr_body: pr_body.map(str::to_string),
            pr_author: Some("@alice".to_string()),
        }
    }

    #[test]
    fn entry_with_pr_number_and_body() {
        let entry = render_entry(&resolved(Some(42), Some("Fixes bug X")));
        assert_eq!(
            entry,
            "Commit abc1234 (PR #42):\nContributors: @alice, @bob\nFixes bug X\n"
        );
    }

    #[test]
    fn entry_without_pr() {
        let entry = render_entry(&resolved(None, None));
        assert_eq!(
            entry,
            "Commit abc1234:\nContributors: @alice, @bob\nNo pull request description found.\n"
        );
    }

    #[test]
    fn entry_with_blank_body_uses_placeholder() {
        let entry = render_entry(&resolved(Some(42), Some("   \n")));
        assert!(entry.contains("No pull request description found."));
    }

    #[test]
    fn unresolved_entry() {
        assert_eq!(
            render_unresolved("abc1234"),
            "Commit abc1234: could not retrieve information.\n"
        );
    }

    #[test]
    fn report_echoes_changeset_before_entries() {
        let entries = vec![
            "Commit abc1234:\nContributors: @alice\nBody A\n".to_string(),
            "Commit def5678: could not retrieve information.\n".to_string(),
        ];
        let report = assemble_report("- abc1234: fix\n- def5678: chore", &entries);

        assert!(report.starts_with("- abc1234: fix\n- def5678: chore\n\n"));
        let first = report.find("Commit abc1234").unwrap();
        let second = report.find("Commit def5678").unwrap();
        assert!(first < second);
    }

    #[test]
    fn lines_without_hashes_survive_verbatim() {
        let changeset = "## Patch changes\n\nplain prose line\n";
        let report = assemble_report(changeset, &[]);
        assert!(report.contains("## Patch changes"));
        assert!(report.contains("plain prose line"));
    }
}
