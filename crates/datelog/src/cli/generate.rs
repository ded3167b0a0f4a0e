//! The changelog pipeline: resolve the repository URL, query the log, render

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use datelog_changelog::{ChangelogGenerator, CommitSource};
use datelog_core::config::Config;
use datelog_core::error::Result;
use datelog_git::LogQuery;

/// Where the rendered changelog goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Truncate and write this file
    File(PathBuf),
    /// Keep the text for printing
    Stdout,
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Commits rendered
    pub commits: usize,
    /// Date sections rendered
    pub sections: usize,
    /// The changelog text, for [`Destination::Stdout`]
    pub rendered: Option<String>,
}

/// One changelog generation with fully resolved configuration
#[derive(Debug, Clone)]
pub struct ChangelogRun {
    config: Config,
    query: LogQuery,
}

impl ChangelogRun {
    /// Create a run for the range `from`..`to`
    pub fn new(config: Config, from: &str, to: &str) -> Self {
        let query = LogQuery::from_config(&config.git).with_from(from).with_to(to);
        Self { config, query }
    }

    /// The resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Repository URL for commit links: configured value, else the remote's URL
    pub fn repo_url<S: CommitSource>(&self, source: &S) -> Result<String> {
        if let Some(url) = &self.config.changelog.repo_url {
            debug!(url = %url, "using configured repository url");
            return Ok(url.clone());
        }
        Ok(source.remote_url(&self.config.git.remote)?)
    }

    /// Run the pipeline against `source`
    #[instrument(skip(self, source), fields(range = %self.query.display_range()))]
    pub fn execute<S: CommitSource>(&self, source: &S, destination: &Destination) -> Result<RunSummary> {
        let repo_url = self.repo_url(source)?;
        let commits = source.commits(&self.query)?;
        info!(commit_count = commits.len(), "commits retrieved");

        let generator = ChangelogGenerator::from_config(&self.config.changelog, repo_url);

        let mut summary = RunSummary {
            commits: commits.len(),
            ..RunSummary::default()
        };

        match destination {
            Destination::File(path) => {
                summary.sections = generator.write_file(&commits, path)?;
            }
            Destination::Stdout => {
                let mut buf = Vec::new();
                summary.sections = generator.write_to(&commits, &mut buf)?;
                summary.rendered = Some(String::from_utf8_lossy(&buf).into_owned());
            }
        }

        Ok(summary)
    }
}
