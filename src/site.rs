//! Static site builder
//!
//! Writes a single-page site: `index.html` with every reachable view
//! pre-rendered, and a pretty-printed copy of the command tree.

use crate::browser::DocBrowser;
use crate::error::DocError;
use crate::render::page::render_page;
use crate::tree::{walk, CommandNode};
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const INDEX_FILE: &str = "index.html";
pub const TREE_FILE: &str = "commands.json";

/// Summary of a completed build.
#[derive(Debug, Clone, Serialize)]
pub struct SiteReport {
    pub output_dir: PathBuf,
    pub views: usize,
    pub services: usize,
    pub operations: usize,
}

pub struct SiteBuilder {
    browser: DocBrowser,
}

impl SiteBuilder {
    pub fn new(tree: Arc<CommandNode>) -> Self {
        Self {
            browser: DocBrowser::new(tree),
        }
    }

    /// `(canonical path, fragment)` for every view reachable from a listing.
    ///
    /// Duplicate sibling names collapse onto the first sibling, which is the
    /// one the navigator resolves to. Commands whose path resolves elsewhere
    /// (a `/` in a name) are logged and skipped.
    pub fn views(&self) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        let mut views = Vec::new();
        for entry in walk(self.browser.tree()) {
            if entry.depth > 3 {
                continue;
            }
            let path = entry.path();
            let rendered = self.browser.render(&path);
            if rendered.canonical_path != path {
                warn!(
                    path = %path,
                    resolved = %rendered.canonical_path,
                    "Command cannot be addressed by its own path; no view written"
                );
                continue;
            }
            if seen.insert(rendered.canonical_path.clone()) {
                views.push((rendered.canonical_path, rendered.html));
            }
        }
        views
    }

    /// Write the site into `output_dir`, creating it if needed.
    pub fn build(&self, output_dir: &Path) -> Result<SiteReport, DocError> {
        let tree = self.browser.tree();
        let views = self.views();

        std::fs::create_dir_all(output_dir)?;
        let title = format!("{} documentation", tree.name);
        std::fs::write(output_dir.join(INDEX_FILE), render_page(&title, &views))?;
        debug!(path = %output_dir.join(INDEX_FILE).display(), "Wrote page");

        let json = serde_json::to_string_pretty(tree)?;
        std::fs::write(output_dir.join(TREE_FILE), json)?;

        let report = SiteReport {
            output_dir: output_dir.to_path_buf(),
            views: views.len(),
            services: tree.subcommands.len(),
            operations: walk(tree).iter().filter(|e| e.depth == 3).count(),
        };
        info!(
            output = %output_dir.display(),
            views = report.views,
            operations = report.operations,
            "Site built"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::resolve;
    use crate::tree::load_from_path;
    use tempfile::TempDir;

    fn tree() -> Arc<CommandNode> {
        Arc::new(
            CommandNode::new("uipath", "CLI")
                .with_subcommand(
                    CommandNode::new("orchestrator", "Orchestrator")
                        .with_subcommand(
                            CommandNode::new("users", "Users")
                                .with_subcommand(CommandNode::new("get", "Get"))
                                .with_subcommand(
                                    CommandNode::new("list", "List")
                                        .with_subcommand(CommandNode::new("deep", "Too deep")),
                                ),
                        )
                        .with_subcommand(CommandNode::new("users", "Duplicate")),
                )
                .with_subcommand(CommandNode::new("du", "Document Understanding")),
        )
    }

    #[test]
    fn test_views_cover_reachable_paths_once() {
        let builder = SiteBuilder::new(tree());
        let paths: Vec<String> = builder.views().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/orchestrator",
                "/orchestrator/users",
                "/orchestrator/users/get",
                "/orchestrator/users/list",
                "/du"
            ]
        );
    }

    #[test]
    fn test_view_keys_resolve_to_themselves() {
        let tree = tree();
        let builder = SiteBuilder::new(Arc::clone(&tree));
        for (path, html) in builder.views() {
            let view = resolve(&tree, &path).view();
            assert_eq!(view.path(), path);
            assert_eq!(crate::render::render_view(&view), html);
        }
    }

    #[test]
    fn test_build_writes_page_and_tree() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site");
        let tree = tree();
        let report = SiteBuilder::new(Arc::clone(&tree)).build(&out).unwrap();

        assert_eq!(report.views, 6);
        assert_eq!(report.services, 2);
        assert_eq!(report.operations, 2);

        let page = std::fs::read_to_string(out.join(INDEX_FILE)).unwrap();
        assert!(page.contains("<title>uipath documentation</title>"));
        assert!(page.contains("<template data-path=\"/orchestrator/users/get\">"));

        let reloaded = load_from_path(&out.join(TREE_FILE)).unwrap();
        assert_eq!(&reloaded, tree.as_ref());
    }

    #[test]
    fn test_views_skip_names_with_slash() {
        let tree = Arc::new(
            CommandNode::new("uipath", "CLI")
                .with_subcommand(CommandNode::new("a/b", "Split"))
                .with_subcommand(CommandNode::new("du", "Document Understanding")),
        );
        let builder = SiteBuilder::new(tree);
        let views = builder.views();
        let paths: Vec<&str> = views.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(paths, vec!["/", "/du"]);
        assert!(views[0].1.contains("<h1>uipath</h1>"));
    }
}
