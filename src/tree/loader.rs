//! Load the command tree from `commands.json`.

use super::node::CommandNode;
use super::validate::validate;
use crate::error::DocError;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Read and parse the command tree at `path`.
///
/// Structural issues (duplicate sibling names and the like) are logged but do
/// not fail the load.
pub fn load_from_path(path: &Path) -> Result<CommandNode, DocError> {
    let contents = std::fs::read_to_string(path)?;
    let root = parse_with_origin(&contents, path.to_path_buf())?;
    debug!(
        path = %path.display(),
        services = root.subcommands.len(),
        "Loaded command tree"
    );
    for issue in validate(&root) {
        warn!(path = %path.display(), "{}", issue);
    }
    Ok(root)
}

/// Parse a command tree from an in-memory JSON document.
pub fn parse_str(json: &str) -> Result<CommandNode, DocError> {
    parse_with_origin(json, PathBuf::from("<memory>"))
}

fn parse_with_origin(json: &str, path: PathBuf) -> Result<CommandNode, DocError> {
    serde_json::from_str(json).map_err(|source| DocError::Parse { path, source })
}
