//! Section title templates
//!
//! A template is plain text with `{day}`, `{month}` and `{year}` tokens. Day
//! and month render zero-padded to two digits, year in full. The rendered
//! text is both the section heading and the grouping key, so a template that
//! drops the day merges all commits of a month into one section.

use chrono::{Datelike, NaiveDate};

use datelog_core::config::DEFAULT_TITLE;

use crate::types::CommitRecord;

const DAY: &str = "{day}";
const MONTH: &str = "{month}";
const YEAR: &str = "{year}";

/// A parsed-once title template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTemplate {
    template: String,
}

impl TitleTemplate {
    /// Create a template from its textual form
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the label for a calendar day
    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = String::with_capacity(self.template.len() + 4);
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];

            if let Some(after) = tail.strip_prefix(DAY) {
                out.push_str(&format!("{:02}", date.day()));
                rest = after;
            } else if let Some(after) = tail.strip_prefix(MONTH) {
                out.push_str(&format!("{:02}", date.month()));
                rest = after;
            } else if let Some(after) = tail.strip_prefix(YEAR) {
                out.push_str(&format!("{:04}", date.year()));
                rest = after;
            } else {
                out.push('{');
                rest = &tail[1..];
            }
        }

        out.push_str(rest);
        out
    }

    /// Render the label for a commit, `None` when its date does not parse
    pub fn render_commit(&self, commit: &CommitRecord) -> Option<String> {
        commit.calendar_date().map(|date| self.render(date))
    }
}

impl Default for TitleTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_template() {
        let title = TitleTemplate::default();
        assert_eq!(title.render(day(2024, 3, 1)), "Timeline: 01-03-2024");
    }

    #[test]
    fn test_zero_padding() {
        let title = TitleTemplate::new("{day}-{month}-{year}");
        assert_eq!(title.render(day(2024, 1, 5)), "05-01-2024");
        assert_eq!(title.render(day(2024, 12, 31)), "31-12-2024");
        assert_eq!(title.render(day(812, 7, 9)), "09-07-0812");
    }

    #[test]
    fn test_repeated_and_reordered_tokens() {
        let title = TitleTemplate::new("{year}/{month}/{day} ({day})");
        assert_eq!(title.render(day(2023, 11, 2)), "2023/11/02 (02)");
    }

    #[test]
    fn test_unknown_tokens_and_braces_are_kept() {
        let title = TitleTemplate::new("{weekday} {day} {");
        assert_eq!(title.render(day(2024, 1, 5)), "{weekday} 05 {");
    }

    #[test]
    fn test_non_ascii_text_around_tokens() {
        let title = TitleTemplate::new("Änderungen – {day}.{month}.{year}");
        assert_eq!(title.render(day(2024, 1, 5)), "Änderungen – 05.01.2024");
    }

    #[test]
    fn test_render_commit() {
        let title = TitleTemplate::new("{day}-{month}-{year}");
        let morning = CommitRecord::new("a", "2024-01-05T10:00:00", "m");
        let night = CommitRecord::new("b", "2024-01-05T23:00:00", "n");
        let broken = CommitRecord::new("c", "not a date", "o");

        assert_eq!(title.render_commit(&morning).as_deref(), Some("05-01-2024"));
        assert_eq!(title.render_commit(&morning), title.render_commit(&night));
        assert_eq!(title.render_commit(&broken), None);
    }
}
