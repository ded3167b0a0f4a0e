//! Git types

use datelog_core::config::{GitConfig, RangeOperator, DEFAULT_TO_REF};

/// Separates hash, date and message within one log record
pub const FIELD_SEPARATOR: char = '\t';

/// Terminates each log record, so multi-line bodies survive intact
pub const RECORD_SEPARATOR: char = '\u{1e}';

/// A commit log query between two references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Start reference; `None` means from the root commit(s)
    pub from: Option<String>,
    /// End reference
    pub to: String,
    /// How `from` and `to` are joined
    pub range_operator: RangeOperator,
    /// Request full bodies (`%B`) instead of subjects (`%s`)
    pub include_body: bool,
}

impl LogQuery {
    /// Create a query for the whole history reachable from `HEAD`
    pub fn new() -> Self {
        Self {
            from: None,
            to: DEFAULT_TO_REF.to_string(),
            range_operator: RangeOperator::default(),
            include_body: false,
        }
    }

    /// Create a query using the git settings of a resolved configuration
    pub fn from_config(config: &GitConfig) -> Self {
        Self::new()
            .with_range_operator(config.range_operator)
            .with_body(config.include_body)
    }

    /// Set the start reference; an empty string means the root commit(s)
    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        let from = from.into();
        self.from = if from.trim().is_empty() { None } else { Some(from) };
        self
    }

    /// Set the end reference; an empty string keeps `HEAD`
    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        let to = to.into();
        if !to.trim().is_empty() {
            self.to = to;
        }
        self
    }

    /// Set the range operator
    pub fn with_range_operator(mut self, op: RangeOperator) -> Self {
        self.range_operator = op;
        self
    }

    /// Include full commit bodies
    pub fn with_body(mut self, include_body: bool) -> Self {
        self.include_body = include_body;
        self
    }

    /// Revision arguments passed to `git log`
    ///
    /// Without a start reference the log of `to` alone is requested, which
    /// covers every root commit and includes them.
    pub fn revision_args(&self) -> Vec<String> {
        match &self.from {
            Some(from) => self.range_operator.revision_args(from, &self.to),
            None => vec![self.to.clone()],
        }
    }

    /// Human-readable range for logs and error messages
    pub fn display_range(&self) -> String {
        self.revision_args().join(" ")
    }

    /// The `--pretty` format producing `hash<TAB>date<TAB>message<RS>`
    pub fn pretty_format(&self) -> String {
        let message = if self.include_body { "%B" } else { "%s" };
        format!("format:%H%x09%ad%x09{}%x1e", message)
    }
}

impl Default for LogQuery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_full_history() {
        let query = LogQuery::new();
        assert_eq!(query.revision_args(), vec!["HEAD"]);
    }

    #[test]
    fn test_empty_refs_keep_defaults() {
        let query = LogQuery::new().with_from("").with_to("  ");
        assert!(query.from.is_none());
        assert_eq!(query.to, "HEAD");
    }

    #[test]
    fn test_range_args() {
        let query = LogQuery::new()
            .with_from("v1.0.0")
            .with_to("main")
            .with_range_operator(RangeOperator::ThreeDot);
        assert_eq!(query.revision_args(), vec!["v1.0.0...main"]);

        let query = query.with_range_operator(RangeOperator::Space);
        assert_eq!(query.revision_args(), vec!["v1.0.0", "main"]);
        assert_eq!(query.display_range(), "v1.0.0 main");
    }

    #[test]
    fn test_pretty_format() {
        let query = LogQuery::new();
        assert_eq!(query.pretty_format(), "format:%H%x09%ad%x09%s%x1e");
        assert_eq!(
            query.with_body(true).pretty_format(),
            "format:%H%x09%ad%x09%B%x1e"
        );
    }

    #[test]
    fn test_from_config() {
        let config = GitConfig {
            range_operator: RangeOperator::Space,
            include_body: true,
            ..GitConfig::default()
        };
        let query = LogQuery::from_config(&config);
        assert_eq!(query.range_operator, RangeOperator::Space);
        assert!(query.include_body);
    }
}
