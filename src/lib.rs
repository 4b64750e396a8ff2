//! cmddoc: Breadcrumb Documentation for CLI Command Trees
//!
//! Loads the JSON description of a CLI's commands, subcommands and parameters,
//! resolves fragment paths (`#/service/category/operation`) against it, and
//! renders the matching documentation view as HTML.

pub mod browser;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod render;
pub mod site;
pub mod tooling;
pub mod tree;
pub mod watch;

pub use browser::{ContentSink, DocBrowser, MountedBrowser, WriterSink};
pub use error::DocError;
pub use navigator::{resolve, Resolution, View, ViewKind};
pub use tree::{CommandNode, Parameter};
