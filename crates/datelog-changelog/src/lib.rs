//! Datelog Changelog - Date-grouped changelog generation
//!
//! This crate turns raw `git log` output into commit records and renders
//! them as markdown, one section per rendered date label.

pub mod formatter;
pub mod generator;
pub mod parser;
pub mod source;
pub mod title;
pub mod types;

pub use formatter::{ChangelogFormatter, MarkdownFormatter};
pub use generator::ChangelogGenerator;
pub use parser::parse_log;
pub use source::CommitSource;
pub use title::TitleTemplate;
pub use types::{CommitRecord, DateSection};
