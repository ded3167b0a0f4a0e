//! Datelog Core - Core library for date-grouped changelogs
//!
//! This crate provides the error types and the layered configuration shared
//! by the git, changelog and CLI crates.

pub mod config;
pub mod error;

pub use config::{ChangelogConfig, Config, ConfigOverrides, GitConfig, RangeOperator};
pub use error::{ChangelogError, ConfigError, DatelogError, GitError, Result};
