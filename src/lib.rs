//! rinit - initialise projects from scaffolds
//!
//! Scaffolds are commands declared in a YAML registry together with an
//! argument synopsis. Before a scaffold runs, rinit prompts for every
//! required argument that was not given on the command line.

// Public modules
pub mod args;
pub mod cli;
pub mod config;
pub mod error;
pub mod merge;
pub mod prompt;
pub mod runner;
pub mod synopsis;

// Re-export commonly used types
pub use error::{Result, RinitError};

/// Current version of rinit
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
