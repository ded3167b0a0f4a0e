//! Markdown changelog formatter

use super::ChangelogFormatter;
use crate::types::CommitRecord;

/// Number of hash characters shown in entry links
pub const SHORT_HASH_LEN: usize = 6;

/// Markdown changelog formatter
///
/// ```text
/// # Timeline: 02-03-2024
/// - [def456](https://example.com/repo/commit/def456...) Add feature
///   - supports X
/// ***
/// ```
pub struct MarkdownFormatter {
    /// Hash characters shown in the link text
    pub short_hash_len: usize,
}

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self {
            short_hash_len: SHORT_HASH_LEN,
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn heading(&self, label: &str) -> String {
        format!("# {}\n", label)
    }

    fn entry(&self, commit: &CommitRecord, repo_url: &str) -> String {
        let mut output = format!(
            "- [{}]({}) {}\n",
            commit.short_hash(self.short_hash_len),
            commit_url(repo_url, &commit.hash),
            commit.subject()
        );

        for line in commit.body_lines() {
            output.push_str(&format!("  - {}\n", line));
        }

        output
    }

    fn section_end(&self) -> &'static str {
        "***\n"
    }
}

/// Web URL of a repository remote, without a trailing `.git`
pub fn web_url(repo_url: &str) -> &str {
    let url = repo_url.trim();
    url.strip_suffix(".git").unwrap_or(url)
}

/// Link to a single commit
pub fn commit_url(repo_url: &str, hash: &str) -> String {
    format!("{}/commit/{}", web_url(repo_url), hash)
}
