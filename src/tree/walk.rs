//! Pre-order traversal with canonical fragment paths.

use super::node::CommandNode;
use serde::Serialize;

/// Conceptual level of a node in the documentation hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Root,
    Service,
    Category,
    Operation,
    /// Deeper than an operation; documented but never rendered specially.
    Nested,
}

impl Level {
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Level::Root,
            1 => Level::Service,
            2 => Level::Category,
            3 => Level::Operation,
            _ => Level::Nested,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Service => "service",
            Level::Category => "category",
            Level::Operation => "operation",
            Level::Nested => "nested",
        }
    }
}

/// One visited node.
#[derive(Debug, Clone)]
pub struct WalkEntry<'a> {
    pub node: &'a CommandNode,
    pub depth: usize,
    /// Names from the first service down to this node; empty for the root.
    pub trail: Vec<&'a str>,
}

impl<'a> WalkEntry<'a> {
    pub fn level(&self) -> Level {
        Level::from_depth(self.depth)
    }

    /// Fragment path addressing this node, e.g. `/orchestrator/users/get`.
    pub fn path(&self) -> String {
        if self.trail.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.trail.join("/"))
        }
    }
}

/// Visit every node of the tree in pre-order, preserving sibling order.
pub fn walk(root: &CommandNode) -> Vec<WalkEntry<'_>> {
    let mut out = Vec::new();
    let mut stack = vec![WalkEntry {
        node: root,
        depth: 0,
        trail: Vec::new(),
    }];
    while let Some(entry) = stack.pop() {
        for child in entry.node.subcommands.iter().rev() {
            let mut trail = entry.trail.clone();
            trail.push(child.name.as_str());
            stack.push(WalkEntry {
                node: child,
                depth: entry.depth + 1,
                trail,
            });
        }
        out.push(entry);
    }
    out
}
