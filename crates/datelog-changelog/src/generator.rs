//! Changelog generation

use std::fs::File;
use std::io::Write;
use std::path::Path;

use datelog_core::config::ChangelogConfig;
use datelog_core::error::{ChangelogError, Result};
use tracing::{debug, info, instrument, warn};

use crate::formatter::{ChangelogFormatter, MarkdownFormatter};
use crate::title::TitleTemplate;
use crate::types::{CommitRecord, DateSection};

/// Changelog generator
///
/// Walks the commits in order and opens a new [`DateSection`] whenever the
/// rendered title changes. Sections are written out as soon as they close.
pub struct ChangelogGenerator {
    formatter: Box<dyn ChangelogFormatter>,
    title: TitleTemplate,
    repo_url: String,
    reverse: bool,
}

impl ChangelogGenerator {
    /// Create a new generator with the default title and markdown output
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            formatter: Box::new(MarkdownFormatter::new()),
            title: TitleTemplate::default(),
            repo_url: repo_url.into(),
            reverse: false,
        }
    }

    /// Create a generator from resolved changelog settings
    pub fn from_config(config: &ChangelogConfig, repo_url: impl Into<String>) -> Self {
        Self::new(repo_url)
            .with_title(TitleTemplate::new(config.title.clone()))
            .with_reverse(config.reverse)
    }

    /// Use a custom formatter
    pub fn with_formatter<F: ChangelogFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Use a custom title template
    pub fn with_title(mut self, title: TitleTemplate) -> Self {
        self.title = title;
        self
    }

    /// Reverse the commit order before grouping
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Render all sections into `out`, returning how many were written.
    ///
    /// An empty commit list writes nothing.
    #[instrument(skip(self, commits, out), fields(commit_count = commits.len(), reverse = self.reverse))]
    pub fn write_to<W: Write>(&self, commits: &[CommitRecord], out: &mut W) -> std::io::Result<usize> {
        let ordered: Box<dyn Iterator<Item = &CommitRecord> + '_> = if self.reverse {
            Box::new(commits.iter().rev())
        } else {
            Box::new(commits.iter())
        };

        let mut current: Option<DateSection> = None;
        let mut written = 0usize;

        for commit in ordered {
            let Some(label) = self.title.render_commit(commit) else {
                warn!(hash = %commit.hash, date = %commit.date, "skipping commit with unparseable date");
                continue;
            };

            if current.as_ref().map(|s| s.label.as_str()) != Some(label.as_str()) {
                if let Some(section) = current.take() {
                    self.flush(&section, out)?;
                    written += 1;
                }
                current = Some(DateSection::new(label));
            }

            if let Some(section) = current.as_mut() {
                section.push_entry(self.formatter.entry(commit, &self.repo_url));
            }
        }

        if let Some(section) = current.take() {
            self.flush(&section, out)?;
            written += 1;
        }

        debug!(section_count = written, "changelog sections written");
        Ok(written)
    }

    /// Render the whole changelog to a string
    pub fn render(&self, commits: &[CommitRecord]) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_to(commits, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Truncate `path` and write the changelog into it.
    ///
    /// The file is created (or emptied) before any section is rendered, so an
    /// empty commit list leaves a zero-length file.
    #[instrument(skip(self, commits), fields(path = %path.display(), commit_count = commits.len()))]
    pub fn write_file(&self, commits: &[CommitRecord], path: &Path) -> Result<usize> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.is_dir() {
                return Err(ChangelogError::DirectoryNotFound(dir.to_path_buf()).into());
            }
        }

        let write_failed = |source: std::io::Error| ChangelogError::WriteFailed {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(write_failed)?;
        let sections = self.write_to(commits, &mut file).map_err(write_failed)?;
        file.flush().map_err(write_failed)?;

        info!(path = %path.display(), sections, "changelog written");
        Ok(sections)
    }

    fn flush<W: Write>(&self, section: &DateSection, out: &mut W) -> std::io::Result<()> {
        debug!(label = %section.label, entries = section.entries.len(), "flushing section");
        out.write_all(section.render(self.formatter.as_ref()).as_bytes())
    }
}
