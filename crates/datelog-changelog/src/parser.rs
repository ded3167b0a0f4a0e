//! Raw commit log parsing

use datelog_git::{FIELD_SEPARATOR, RECORD_SEPARATOR};
use tracing::{debug, warn};

use crate::types::CommitRecord;

/// Parse raw `git log` output into commit records, preserving order.
///
/// Records end with the record separator when the output contains one and
/// with a newline otherwise. Within a record only the first two tabs split
/// fields; the message keeps any further tabs. Records whose date does not
/// parse are skipped.
pub fn parse_log(raw: &str) -> Vec<CommitRecord> {
    let records: Box<dyn Iterator<Item = &str> + '_> = if raw.contains(RECORD_SEPARATOR) {
        Box::new(raw.split(RECORD_SEPARATOR))
    } else {
        Box::new(raw.lines())
    };

    let mut commits = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        let record = record.trim_start_matches(['\r', '\n']).trim_end();
        if record.is_empty() {
            continue;
        }

        match parse_record(record) {
            Some(commit) => commits.push(commit),
            None => skipped += 1,
        }
    }

    debug!(parsed = commits.len(), skipped, "commit log parsed");
    commits
}

/// Parse one `hash<TAB>date<TAB>message` record
pub fn parse_record(record: &str) -> Option<CommitRecord> {
    let mut fields = record.splitn(3, FIELD_SEPARATOR);
    let hash = fields.next().unwrap_or_default().trim().replace('"', "");
    let date = fields.next().unwrap_or_default().trim();
    let message = fields.next().unwrap_or_default();

    let commit = CommitRecord::new(hash, date, message);
    if commit.calendar_date().is_none() {
        warn!(hash = %commit.hash, date = %commit.date, "skipping commit with unparseable date");
        return None;
    }

    Some(commit)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH_A: &str = "abc1234567890abcdef1234567890abcdef12345";
    const HASH_B: &str = "def4567890abcdef4567890abcdef4567890abcd";

    #[test]
    fn test_empty_input() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n\n").is_empty());
    }

    #[test]
    fn test_line_records() {
        let raw = format!(
            "{}\t2024-03-02T09:00:00+00:00\tAdd feature\n{}\t2024-03-01T12:00:00+00:00\tFix bug",
            HASH_B, HASH_A
        );
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, HASH_B);
        assert_eq!(commits[0].message, "Add feature");
        assert_eq!(commits[1].hash, HASH_A);
        assert_eq!(commits[1].date, "2024-03-01T12:00:00+00:00");
    }

    #[test]
    fn test_separator_records_keep_bodies() {
        let raw = format!(
            "{}\t2024-03-02T09:00:00Z\tAdd feature\n\nsupports X\n\u{1e}\n{}\t2024-03-01T12:00:00Z\tFix bug\n\u{1e}",
            HASH_B, HASH_A
        );
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "Add feature\n\nsupports X");
        assert_eq!(commits[1].message, "Fix bug");
    }

    #[test]
    fn test_embedded_tab_is_not_split() {
        let raw = format!("{}\t2024-03-01\tfix:\tkeep\ttabs", HASH_A);
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "fix:\tkeep\ttabs");
    }

    #[test]
    fn test_quotes_are_stripped_from_hash() {
        let raw = format!("\"{}\t2024-03-01\tmsg\"", HASH_A);
        let commits = parse_log(&raw);

        assert_eq!(commits[0].hash, HASH_A);
        assert_eq!(commits[0].message, "msg\"");
    }

    #[test]
    fn test_missing_message_defaults_to_empty() {
        let raw = format!("{}\t2024-03-01", HASH_A);
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let raw = format!(
            "garbage line\n{}\tnot-a-date\tmsg\n{}\t2024-03-01\tkept",
            HASH_B, HASH_A
        );
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].message, "kept");
    }

    #[test]
    fn test_crlf_lines() {
        let raw = format!("{}\t2024-03-01\tone\r\n{}\t2024-03-02\ttwo\r\n", HASH_A, HASH_B);
        let commits = parse_log(&raw);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].message, "one");
        assert_eq!(commits[1].message, "two");
    }
}
