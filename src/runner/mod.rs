//! Command resolution and dispatch
//!
//! This module maps positional arguments to registered commands, loads the
//! environment they need and runs them with their final arguments.

pub mod context;
pub mod dispatch;
pub mod env;
pub mod interpolate;
pub mod registry;

// Re-export main types
pub use context::*;
pub use dispatch::*;
pub use env::*;
pub use interpolate::*;
pub use registry::*;
