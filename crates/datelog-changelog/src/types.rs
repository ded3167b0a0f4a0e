//! Changelog types

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::formatter::ChangelogFormatter;

/// One commit from the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full commit hash
    pub hash: String,
    /// Timestamp as reported by git
    pub date: String,
    /// Commit message, possibly spanning several lines
    pub message: String,
}

impl CommitRecord {
    /// Create a new CommitRecord
    pub fn new(
        hash: impl Into<String>,
        date: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            date: date.into(),
            message: message.into(),
        }
    }

    /// First `len` characters of the hash
    pub fn short_hash(&self, len: usize) -> &str {
        match self.hash.char_indices().nth(len) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }

    /// First line of the message
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Every line after the subject, blank ones included.
    ///
    /// A body made only of whitespace yields nothing.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        let body = self.message.lines().skip(1);
        let has_content = body.clone().any(|line| !line.trim().is_empty());
        body.filter(move |_| has_content)
    }

    /// Calendar day of the commit, in the commit's own UTC offset
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.date)
    }
}

/// Parse the calendar day out of a git timestamp.
///
/// Accepts RFC 3339 (`--date=iso-strict`), git's `iso` format
/// (`2024-03-01 12:00:00 +0100`), a naive date-time, or a bare date.
pub fn parse_calendar_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Commits sharing one rendered date label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSection {
    /// Rendered title label, also the grouping key
    pub label: String,
    /// Rendered commit entries, in output order
    pub entries: Vec<String>,
}

impl DateSection {
    /// Create an empty section
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            entries: Vec::new(),
        }
    }

    /// Add a rendered entry
    pub fn push_entry(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// Heading, entries and closing marker as one block of text
    pub fn render(&self, formatter: &dyn ChangelogFormatter) -> String {
        let mut out = formatter.heading(&self.label);
        for entry in &self.entries {
            out.push_str(entry);
        }
        out.push_str(formatter.section_end());
        out
    }
}
