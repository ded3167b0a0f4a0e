//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::types::CommitRecord;

/// Trait for changelog formatters
///
/// A formatter renders the pieces of a date section; the generator decides
/// when sections open and close.
pub trait ChangelogFormatter: Send + Sync {
    /// Heading line opening a section
    fn heading(&self, label: &str) -> String;

    /// One commit entry, including any body lines
    fn entry(&self, commit: &CommitRecord, repo_url: &str) -> String;

    /// Marker closing a section
    fn section_end(&self) -> &'static str;
}
