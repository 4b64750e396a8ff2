//! Navigator
//!
//! Resolves a fragment path (`#/service/category/operation`) against the
//! command tree. Resolution stops at the first segment that does not name a
//! subcommand of the node above it; nothing past that point is consulted.

use crate::tree::CommandNode;
use serde::Serialize;

/// Find a direct subcommand by exact name. First match wins.
pub fn find_subcommand<'a>(node: &'a CommandNode, name: &str) -> Option<&'a CommandNode> {
    node.subcommands.iter().find(|c| c.name == name)
}

/// A path segment that named an existing subcommand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    pub name: &'a str,
    pub node: &'a CommandNode,
}

/// Result of resolving a path: up to three levels below the root.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a> {
    pub root: &'a CommandNode,
    pub service: Option<Resolved<'a>>,
    pub category: Option<Resolved<'a>>,
    pub operation: Option<Resolved<'a>>,
}

/// The view selected for a resolution: the deepest resolved level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Root(&'a CommandNode),
    Service {
        executable: &'a str,
        service: &'a CommandNode,
    },
    Category {
        executable: &'a str,
        service_name: &'a str,
        category: &'a CommandNode,
    },
    Operation {
        executable: &'a str,
        service_name: &'a str,
        category_name: &'a str,
        operation: &'a CommandNode,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Root,
    Service,
    Category,
    Operation,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Root => "root",
            ViewKind::Service => "service",
            ViewKind::Category => "category",
            ViewKind::Operation => "operation",
        }
    }
}

/// Resolve `path` against `root`.
///
/// Segment 0 (whatever precedes the first `/`, typically `#` or nothing) is
/// ignored, segments 1 to 3 name the service, category and operation, and
/// anything after that is ignored.
pub fn resolve<'a>(root: &'a CommandNode, path: &'a str) -> Resolution<'a> {
    let mut segments = path.split('/').skip(1);

    let service = segments
        .next()
        .and_then(|name| find_subcommand(root, name).map(|node| Resolved { name, node }));
    let category = service.and_then(|parent| {
        segments
            .next()
            .and_then(|name| find_subcommand(parent.node, name).map(|node| Resolved { name, node }))
    });
    let operation = category.and_then(|parent| {
        segments
            .next()
            .and_then(|name| find_subcommand(parent.node, name).map(|node| Resolved { name, node }))
    });

    Resolution {
        root,
        service,
        category,
        operation,
    }
}

impl<'a> Resolution<'a> {
    /// Number of levels resolved below the root (0 to 3).
    pub fn depth(&self) -> usize {
        [
            self.service.is_some(),
            self.category.is_some(),
            self.operation.is_some(),
        ]
        .iter()
        .filter(|resolved| **resolved)
        .count()
    }

    pub fn view(&self) -> View<'a> {
        let executable = self.root.name.as_str();
        match (self.service, self.category, self.operation) {
            (Some(service), Some(category), Some(operation)) => View::Operation {
                executable,
                service_name: service.name,
                category_name: category.name,
                operation: operation.node,
            },
            (Some(service), Some(category), None) => View::Category {
                executable,
                service_name: service.name,
                category: category.node,
            },
            (Some(service), _, _) => View::Service {
                executable,
                service: service.node,
            },
            (None, _, _) => View::Root(self.root),
        }
    }
}

impl<'a> View<'a> {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Root(_) => ViewKind::Root,
            View::Service { .. } => ViewKind::Service,
            View::Category { .. } => ViewKind::Category,
            View::Operation { .. } => ViewKind::Operation,
        }
    }

    /// The node documented by this view.
    pub fn node(&self) -> &'a CommandNode {
        match *self {
            View::Root(root) => root,
            View::Service { service, .. } => service,
            View::Category { category, .. } => category,
            View::Operation { operation, .. } => operation,
        }
    }

    /// Canonical fragment path of this view, without the leading `#`.
    pub fn path(&self) -> String {
        match *self {
            View::Root(_) => "/".to_string(),
            View::Service { service, .. } => format!("/{}", service.name),
            View::Category {
                service_name,
                category,
                ..
            } => format!("/{}/{}", service_name, category.name),
            View::Operation {
                service_name,
                category_name,
                operation,
                ..
            } => format!("/{}/{}/{}", service_name, category_name, operation.name),
        }
    }
}
