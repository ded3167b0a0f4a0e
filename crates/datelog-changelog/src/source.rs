//! Where commits come from

use datelog_git::{GitRepo, LogQuery};
use tracing::instrument;

use crate::parser::parse_log;
use crate::types::CommitRecord;

/// A repository that can answer the queries a changelog run needs
pub trait CommitSource {
    /// URL of the named remote
    fn remote_url(&self, remote: &str) -> datelog_git::Result<String>;

    /// Raw log output for a query, in the record format of [`parse_log`]
    fn log_raw(&self, query: &LogQuery) -> datelog_git::Result<String>;

    /// Parsed commits for a query, in the order the repository returned them
    #[instrument(skip(self), fields(range = %query.display_range()))]
    fn commits(&self, query: &LogQuery) -> datelog_git::Result<Vec<CommitRecord>> {
        let raw = self.log_raw(query)?;
        Ok(parse_log(&raw))
    }
}

impl CommitSource for GitRepo {
    fn remote_url(&self, remote: &str) -> datelog_git::Result<String> {
        GitRepo::remote_url(self, remote)
    }

    fn log_raw(&self, query: &LogQuery) -> datelog_git::Result<String> {
        GitRepo::log_raw(self, query)
    }
}
