//! Datelog Git - Git repository queries
//!
//! This crate locates the repository, resolves remote URLs through libgit2,
//! and retrieves the commit log between two references through the `git`
//! binary.

mod log;
mod remote;
mod repository;
#[cfg(test)]
mod test_support;
pub mod types;

pub use repository::{GitRepo, Result};
pub use types::{LogQuery, FIELD_SEPARATOR, RECORD_SEPARATOR};
