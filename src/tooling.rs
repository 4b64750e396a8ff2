//! Tooling & Integration Layer
//!
//! Command-line surface over the navigator, renderer, site builder, and watcher.

pub mod cli;
mod format;

pub use cli::{Cli, CliContext, Commands};
