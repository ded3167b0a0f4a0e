//! Configuration system for Datelog
//!
//! Values are layered in a fixed order: built-in defaults, then an optional
//! config file, then command-line overrides. The repository URL is the one
//! value that may still be unset afterwards; callers resolve it from the git
//! remote.

pub mod defaults;
mod loader;
mod types;
pub mod validation;

pub use defaults::*;
pub use loader::*;
pub use types::*;
pub use validation::*;
