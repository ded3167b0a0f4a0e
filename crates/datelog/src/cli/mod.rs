//! CLI definition and command handling

pub mod generate;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use datelog_core::config::{load_config_or_default, validate_config, ConfigOverrides, RangeOperator};
use datelog_core::DatelogError;
use datelog_git::GitRepo;

use generate::{ChangelogRun, Destination};

/// Datelog - generate a date-grouped markdown changelog from git history
#[derive(Debug, Parser)]
#[command(name = "datelog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The starting commit reference (default: the root commit)
    #[arg(short, long, default_value = "")]
    pub from: String,

    /// The ending commit reference
    #[arg(short, long, default_value = "HEAD")]
    pub to: String,

    /// Reverse the order of commits
    ///
    /// Only switches reversing on; `reverse = true` in a config file cannot be
    /// turned off from the command line.
    #[arg(short, long)]
    pub reverse: bool,

    /// The repository URL used for commit links (default: remote URL)
    #[arg(short = 'u', long = "repoUrl", alias = "repo-url")]
    pub repo_url: Option<String>,

    /// The name of the changelog file [default: CHANGELOG.md]
    #[arg(short = 'n', long = "fileName", alias = "file-name")]
    pub file_name: Option<String>,

    /// The directory to save the changelog file in [default: current directory]
    #[arg(short = 'p', long = "changelogPath", alias = "changelog-path")]
    pub changelog_path: Option<PathBuf>,

    /// Section title template with {day}, {month} and {year} placeholders
    /// [default: "Timeline: {day}-{month}-{year}"]
    #[arg(short = 'l', long)]
    pub title: Option<String>,

    /// The name of the remote used to resolve the repository URL [default: origin]
    #[arg(short = 'm', long = "remoteName", alias = "remote-name")]
    pub remote_name: Option<String>,

    /// The range operator joining --from and --to: "...", ".." or "space" [default: ..]
    #[arg(short = 'o', long = "rangeOperator", alias = "range-operator")]
    pub range_operator: Option<RangeOperator>,

    /// Include full commit bodies as indented lines
    #[arg(short, long)]
    pub body: bool,

    /// Print the changelog instead of writing the file
    #[arg(long)]
    pub stdout: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,
}

impl Cli {
    /// Values given on the command line, layered over config file values
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            repo_url: self.repo_url.clone(),
            file_name: self.file_name.clone(),
            changelog_path: self.changelog_path.clone(),
            reverse: self.reverse.then_some(true),
            title: self.title.clone(),
            remote_name: self.remote_name.clone(),
            range_operator: self.range_operator,
            include_body: self.body.then_some(true),
        }
    }

    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        let cwd = std::env::current_dir()?;
        let (config, config_path) = load_config_or_default(&cwd)?;
        let config = config.with_overrides(self.overrides());
        validate_config(&config)?;
        info!(
            config_path = ?config_path,
            from = %self.from,
            to = %self.to,
            range_operator = %config.git.range_operator,
            "executing changelog generation"
        );

        let repo = GitRepo::discover(&cwd).map_err(DatelogError::from)?;
        let destination = if self.stdout {
            Destination::Stdout
        } else {
            Destination::File(config.changelog.output_path(&cwd))
        };

        let run = ChangelogRun::new(config, &self.from, &self.to);
        let summary = run.execute(&repo, &destination)?;
        info!(
            commits = summary.commits,
            sections = summary.sections,
            "changelog generated"
        );

        match &destination {
            Destination::Stdout => print!("{}", summary.rendered.unwrap_or_default()),
            Destination::File(_) if !self.quiet => {
                output::success(&format!(
                    "{} has been updated successfully.",
                    output::path_style().apply_to(&run.config().changelog.file_name)
                ));
            }
            Destination::File(_) => {}
        }

        Ok(())
    }
}
