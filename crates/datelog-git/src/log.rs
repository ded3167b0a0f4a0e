//! Commit log retrieval through the git CLI

use std::process::Command;

use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::LogQuery;
use datelog_core::error::GitError;

impl GitRepo {
    /// Run `git log` for `query` and return its raw output.
    ///
    /// Each record has the shape `hash<TAB>date<TAB>message<RS>`, with the
    /// date in strict ISO 8601. An empty range yields an empty string.
    #[instrument(skip(self), fields(range = %query.display_range()))]
    pub fn log_raw(&self, query: &LogQuery) -> Result<String> {
        let start = std::time::Instant::now();

        let mut cmd = Command::new("git");
        cmd.current_dir(self.path());
        cmd.args(["log", "--no-color", "--no-show-signature", "--date=iso-strict"]);
        cmd.arg(format!("--pretty={}", query.pretty_format()));
        cmd.args(query.revision_args());
        cmd.arg("--");

        debug!(?cmd, "running git log");
        let output = cmd.output().map_err(|e| {
            GitError::BinaryUnavailable(format!("{} ({})", e, self.path().display()))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::LogFailed {
                range: query.display_range(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            range = %query.display_range(),
            bytes = stdout.len(),
            duration_ms = start.elapsed().as_millis(),
            "retrieved git log"
        );
        Ok(stdout)
    }
}
