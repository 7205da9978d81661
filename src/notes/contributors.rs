//! Contributor identity handling.
//!
//! Co-authors come from `Co-authored-by: Name <email>` trailer lines in the
//! commit message. Identities are normalized to `@login` form where a login
//! can be derived, and left as plain names otherwise.

use std::sync::LazyLock;

use regex::Regex;

/// GitHub's no-reply address domain; emails here encode the login.
const NOREPLY_DOMAIN: &str = "users.noreply.github.com";

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static CO_AUTHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Co-authored-by:\s*(.+?)\s*<([^>]+)>").unwrap());

/// Parses `Co-authored-by:` trailers into display identities.
///
/// Order follows message order; duplicates are kept (deduplication happens
/// at report-assembly time).
pub fn parse_co_authors(message: &str) -> Vec<String> {
    CO_AUTHOR_PATTERN
        .captures_iter(message)
        .map(|caps| co_author_identity(&caps[1], &caps[2]))
        .collect()
}

/// Resolves a trailer's name/email pair to a display identity.
///
/// No-reply addresses encode the login in the local part (as `login` or
/// `12345+login`); bare single-word names are treated as logins; anything
/// else is used verbatim.
fn co_author_identity(name: &str, email: &str) -> String {
    if let Some(local) = email.strip_suffix(&format!("@{NOREPLY_DOMAIN}")) {
        let login = local.split_once('+').map_or(local, |(_, login)| login);
        return format!("@{login}");
    }

    if is_bare_username(name) {
        return format!("@{name}");
    }

    name.to_string()
}

/// Whether a name contains no spaces or punctuation and can pass as a login.
fn is_bare_username(name: &str) -> bool {
    !name.is_empty() && name.chars().all(char::is_alphanumeric)
}

/// Builds the deduplicated, order-preserving contributor list: commit
/// author, then PR author if distinct, then co-authors.
///
/// Equality is literal string comparison; the same person under two
/// spellings appears twice.
pub fn contributor_list(
    author: &str,
    pr_author: Option<&str>,
    co_authors: &[String],
) -> Vec<String> {
    let mut contributors: Vec<String> = Vec::new();

    for identity in std::iter::once(author)
        .chain(pr_author)
        .chain(co_authors.iter().map(String::as_str))
    {
        if !contributors.iter().any(|existing| existing == identity) {
            contributors.push(identity.to_string());
        }
    }

    contributors
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- parse_co_authors ---

    #[test]
    fn parses_trailers_in_message_order() {
        let message = "Fix dropdown\n\nCo-authored-by: octocat <octocat@users.noreply.github.com>\nCo-authored-by: Jane Doe <jane@example.com>\n";
        assert_eq!(parse_co_authors(message), vec!["@octocat", "Jane Doe"]);
    }

    #[test]
    fn no_trailers_no_co_authors() {
        assert!(parse_co_authors("fix dropdown positioning").is_empty());
    }

    #[test]
    fn trailer_must_start_its_line() {
        let message = "see Co-authored-by: octocat <o@example.com> in the docs";
        assert!(parse_co_authors(message).is_empty());
    }

    #[test]
    fn duplicate_spellings_are_kept() {
        let message = "Fix\n\nCo-authored-by: octocat <octocat@users.noreply.github.com>\nCo-authored-by: The Octocat <octo@example.org>\n";
        assert_eq!(parse_co_authors(message), vec!["@octocat", "The Octocat"]);
    }

    // --- co_author_identity ---

    #[test]
    fn noreply_email_yields_login() {
        assert_eq!(
            co_author_identity("Anyone", "octocat@users.noreply.github.com"),
            "@octocat"
        );
    }

    #[test]
    fn noreply_numeric_id_form_yields_login() {
        assert_eq!(
            co_author_identity("Anyone", "583231+octocat@users.noreply.github.com"),
            "@octocat"
        );
    }

    #[test]
    fn bare_name_treated_as_login() {
        assert_eq!(co_author_identity("octocat", "octo@example.com"), "@octocat");
    }

    #[test]
    fn spaced_name_used_verbatim() {
        assert_eq!(
            co_author_identity("Jane Doe", "jane@example.com"),
            "Jane Doe"
        );
    }

    #[test]
    fn punctuated_name_used_verbatim() {
        assert_eq!(
            co_author_identity("jane.doe", "jane@example.com"),
            "jane.doe"
        );
    }

    // --- contributor_list ---

    #[test]
    fn author_listed_once() {
        let co_authors = vec!["@octocat".to_string()];
        assert_eq!(
            contributor_list("@octocat", Some("@octocat"), &co_authors),
            vec!["@octocat"]
        );
    }

    #[test]
    fn distinct_pr_author_follows_commit_author() {
        let co_authors = vec!["@carol".to_string()];
        assert_eq!(
            contributor_list("@alice", Some("@bob"), &co_authors),
            vec!["@alice", "@bob", "@carol"]
        );
    }

    #[test]
    fn no_cross_field_dedup_by_identity_equivalence() {
        // Two spellings of the same person survive; only literal duplicates
        // collapse.
        let co_authors = vec!["@octocat".to_string(), "The Octocat".to_string()];
        assert_eq!(
            contributor_list("@octocat", None, &co_authors),
            vec!["@octocat", "The Octocat"]
        );
    }

    #[test]
    fn missing_pr_author_is_skipped() {
        assert_eq!(contributor_list("@alice", None, &[]), vec!["@alice"]);
    }
}
