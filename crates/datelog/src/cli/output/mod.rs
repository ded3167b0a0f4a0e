//! Output formatting utilities

use console::{style, Style};

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// One-line diagnostic for a failed run.
///
/// Only the top-level message is used since every error already embeds its
/// cause. Multi-line text such as git's stderr is joined with `; `.
pub fn diagnostic(err: &anyhow::Error) -> String {
    err.to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
