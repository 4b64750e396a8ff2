//! Command tree: node types, loading, validation, and traversal.

mod loader;
mod node;
mod validate;
mod walk;

pub use loader::{load_from_path, parse_str};
pub use node::{display_value, CommandNode, Parameter};
pub use validate::{validate, TreeIssue};
pub use walk::{walk, Level, WalkEntry};
