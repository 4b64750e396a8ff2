//! Structural checks for a loaded command tree.

use super::node::CommandNode;
use super::walk::walk;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A structural problem found in the tree.
///
/// Issues never prevent rendering: a duplicated name resolves to the first
/// sibling carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeIssue {
    DuplicateSubcommand { path: String, name: String },
    EmptyName { path: String, index: usize },
    DuplicateParameter { path: String, name: String },
    /// The name contains `/`, so no fragment path can address it.
    UnaddressableName { path: String, name: String },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeIssue::DuplicateSubcommand { path, name } => {
                write!(f, "{}: duplicate subcommand '{}'", path, name)
            }
            TreeIssue::EmptyName { path, index } => {
                write!(f, "{}: subcommand #{} has an empty name", path, index)
            }
            TreeIssue::DuplicateParameter { path, name } => {
                write!(f, "{}: duplicate parameter '--{}'", path, name)
            }
            TreeIssue::UnaddressableName { path, name } => {
                write!(f, "{}: subcommand '{}' contains '/' and cannot be linked", path, name)
            }
        }
    }
}

/// Collect every structural issue, in tree order.
pub fn validate(root: &CommandNode) -> Vec<TreeIssue> {
    let mut issues = Vec::new();
    for entry in walk(root) {
        let path = entry.path();

        let mut seen = HashSet::new();
        for (index, child) in entry.node.subcommands.iter().enumerate() {
            if child.name.is_empty() {
                issues.push(TreeIssue::EmptyName {
                    path: path.clone(),
                    index,
                });
                continue;
            }
            if child.name.contains('/') {
                issues.push(TreeIssue::UnaddressableName {
                    path: path.clone(),
                    name: child.name.clone(),
                });
            }
            if !seen.insert(child.name.as_str()) {
                issues.push(TreeIssue::DuplicateSubcommand {
                    path: path.clone(),
                    name: child.name.clone(),
                });
            }
        }

        let mut seen = HashSet::new();
        for parameter in &entry.node.parameters {
            if !seen.insert(parameter.name.as_str()) {
                issues.push(TreeIssue::DuplicateParameter {
                    path: path.clone(),
                    name: parameter.name.clone(),
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Parameter;

    #[test]
    fn test_clean_tree_has_no_issues() {
        let root = CommandNode::new("uipath", "")
            .with_subcommand(CommandNode::new("a", ""))
            .with_subcommand(CommandNode::new("b", ""));
        assert!(validate(&root).is_empty());
    }

    #[test]
    fn test_duplicate_siblings_reported() {
        let root = CommandNode::new("uipath", "").with_subcommand(
            CommandNode::new("orchestrator", "")
                .with_subcommand(CommandNode::new("users", ""))
                .with_subcommand(CommandNode::new("users", "")),
        );
        let issues = validate(&root);
        assert_eq!(
            issues,
            vec![TreeIssue::DuplicateSubcommand {
                path: "/orchestrator".to_string(),
                name: "users".to_string()
            }]
        );
        assert_eq!(issues[0].to_string(), "/orchestrator: duplicate subcommand 'users'");
    }

    #[test]
    fn test_empty_name_and_duplicate_parameter() {
        let root = CommandNode::new("uipath", "")
            .with_subcommand(CommandNode::new("", ""))
            .with_parameter(Parameter::new("debug", "boolean", false))
            .with_parameter(Parameter::new("debug", "boolean", false));
        let issues = validate(&root);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], TreeIssue::EmptyName { index: 0, .. }));
        assert!(matches!(issues[1], TreeIssue::DuplicateParameter { .. }));
    }

    #[test]
    fn test_slash_in_name_reported() {
        let root = CommandNode::new("uipath", "").with_subcommand(CommandNode::new("a/b", ""));
        let issues = validate(&root);
        assert_eq!(
            issues,
            vec![TreeIssue::UnaddressableName {
                path: "/".to_string(),
                name: "a/b".to_string()
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "/: subcommand 'a/b' contains '/' and cannot be linked"
        );
    }
}
