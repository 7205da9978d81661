//! Changeset parsing.
//!
//! A changeset is free-form text produced by a release-preparation tool. The
//! only structure this module cares about is a hexadecimal commit hash of
//! 7 to 40 characters immediately followed by a colon; everything else is
//! preserved verbatim in the output.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static COMMIT_HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9a-f]{7,40}):").unwrap());

/// Extracts the first commit hash from a single changeset line.
///
/// Returns `None` for lines without a hash-plus-colon token.
pub fn extract_commit_hash(line: &str) -> Option<&str> {
    COMMIT_HASH_PATTERN
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts commit hashes from changeset text, in document order.
///
/// The first match per line wins; lines without a match contribute nothing.
pub fn extract_commit_hashes(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(extract_commit_hash)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_abbreviated_hash() {
        assert_eq!(
            extract_commit_hash("- abc1234: fix dropdown positioning"),
            Some("abc1234")
        );
    }

    #[test]
    fn extracts_full_hash() {
        let line = "0123456789abcdef0123456789abcdef01234567: initial import";
        assert_eq!(
            extract_commit_hash(line),
            Some("0123456789abcdef0123456789abcdef01234567")
        );
    }

    #[test]
    fn requires_trailing_colon() {
        assert_eq!(extract_commit_hash("- abc1234 fix dropdown"), None);
    }

    #[test]
    fn ignores_short_tokens() {
        // Six hex characters is below the abbreviated-hash threshold.
        assert_eq!(extract_commit_hash("- abc123: too short"), None);
    }

    #[test]
    fn ignores_uppercase_hex() {
        assert_eq!(extract_commit_hash("- ABC1234: not a hash"), None);
    }

    #[test]
    fn first_match_per_line_wins() {
        assert_eq!(
            extract_commit_hash("abc1234: see also def5678:"),
            Some("abc1234")
        );
    }

    #[test]
    fn collects_hashes_in_document_order() {
        let text = "## Patch changes\n\n- abc1234: fix dropdown\nplain prose line\n- def5678: update deps\n";
        assert_eq!(extract_commit_hashes(text), vec!["abc1234", "def5678"]);
    }

    #[test]
    fn empty_text_yields_no_hashes() {
        assert!(extract_commit_hashes("").is_empty());
    }
}
