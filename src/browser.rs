//! Documentation browser
//!
//! Holds the loaded command tree for the lifetime of a session and re-renders
//! the content container on every navigation event. Mounting and navigating
//! share one pipeline: resolve the fragment, render the selected view, replace
//! the container.

use crate::error::DocError;
use crate::navigator::{resolve, ViewKind};
use crate::render::render_view;
use crate::tree::CommandNode;
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::debug;

/// Destination for rendered fragments; each call replaces the previous content.
pub trait ContentSink {
    fn replace(&mut self, html: &str) -> Result<(), DocError>;
}

impl ContentSink for String {
    fn replace(&mut self, html: &str) -> Result<(), DocError> {
        self.clear();
        self.push_str(html);
        Ok(())
    }
}

/// Writes every replacement to a stream, terminated by a form feed so a
/// reader can split successive views.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ContentSink for WriterSink<W> {
    fn replace(&mut self, html: &str) -> Result<(), DocError> {
        self.writer.write_all(html.as_bytes())?;
        self.writer.write_all(b"\x0c\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Rendered view for one fragment path.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub kind: ViewKind,
    /// Path of the view actually shown, after fallback.
    pub canonical_path: String,
    pub html: String,
}

/// Immutable browser over a loaded command tree.
#[derive(Debug, Clone)]
pub struct DocBrowser {
    tree: Arc<CommandNode>,
}

impl DocBrowser {
    pub fn new(tree: Arc<CommandNode>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &CommandNode {
        &self.tree
    }

    /// Resolve and render `path`.
    pub fn render(&self, path: &str) -> Rendered {
        let view = resolve(&self.tree, path).view();
        Rendered {
            kind: view.kind(),
            canonical_path: view.path(),
            html: render_view(&view),
        }
    }

    /// HTML for `path`.
    pub fn view(&self, path: &str) -> String {
        self.render(path).html
    }

    /// Attach to a container and show `initial_path`.
    pub fn mount<S: ContentSink>(
        &self,
        sink: S,
        initial_path: &str,
    ) -> Result<MountedBrowser<S>, DocError> {
        let mut mounted = MountedBrowser {
            browser: self.clone(),
            sink,
            current: String::new(),
        };
        mounted.navigate(initial_path)?;
        Ok(mounted)
    }
}

/// A browser bound to a container, reacting to navigation events.
pub struct MountedBrowser<S: ContentSink> {
    browser: DocBrowser,
    sink: S,
    current: String,
}

impl<S: ContentSink> MountedBrowser<S> {
    /// Navigation-change listener: re-render the container for `path`.
    pub fn navigate(&mut self, path: &str) -> Result<ViewKind, DocError> {
        let rendered = self.browser.render(path);
        debug!(
            path,
            view = rendered.kind.as_str(),
            canonical = %rendered.canonical_path,
            "Navigated"
        );
        self.sink.replace(&rendered.html)?;
        self.current = path.to_string();
        Ok(rendered.kind)
    }

    /// Treat each non-blank line of `events` as a navigation event.
    ///
    /// Returns the number of events handled.
    pub fn follow<R: BufRead>(&mut self, events: R) -> Result<usize, DocError> {
        let mut handled = 0;
        for line in events.lines() {
            let line = line?;
            let path = line.trim();
            if path.is_empty() {
                continue;
            }
            self.navigate(path)?;
            handled += 1;
        }
        Ok(handled)
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_root, render_service};

    fn browser() -> DocBrowser {
        let tree = CommandNode::new("uipath", "CLI").with_subcommand(
            CommandNode::new("orchestrator", "Orchestrator")
                .with_subcommand(CommandNode::new("users", "Users")),
        );
        DocBrowser::new(Arc::new(tree))
    }

    #[test]
    fn test_mount_renders_initial_view() {
        let browser = browser();
        let mounted = browser.mount(String::new(), "").unwrap();
        assert_eq!(mounted.sink(), &render_root(browser.tree()));
        assert_eq!(mounted.current_path(), "");
    }

    #[test]
    fn test_navigate_replaces_content() {
        let browser = browser();
        let mut mounted = browser.mount(String::new(), "#/").unwrap();
        let kind = mounted.navigate("#/orchestrator").unwrap();
        assert_eq!(kind, ViewKind::Service);
        assert_eq!(
            mounted.sink(),
            &render_service("uipath", &browser.tree().subcommands[0])
        );
        assert!(!mounted.sink().contains("Available Services"));
    }

    #[test]
    fn test_mount_and_navigate_agree() {
        let browser = browser();
        let mounted = browser.mount(String::new(), "#/orchestrator/users").unwrap();
        let mut other = browser.mount(String::new(), "").unwrap();
        other.navigate("#/orchestrator/users").unwrap();
        assert_eq!(mounted.sink(), other.sink());
    }

    #[test]
    fn test_follow_skips_blank_lines() {
        let browser = browser();
        let mut mounted = browser.mount(WriterSink::new(Vec::new()), "").unwrap();
        let handled = mounted
            .follow("#/orchestrator\n\n  \n#/orchestrator/users\n".as_bytes())
            .unwrap();
        assert_eq!(handled, 2);
        assert_eq!(mounted.current_path(), "#/orchestrator/users");

        let output = String::from_utf8(mounted.into_sink().into_inner()).unwrap();
        assert_eq!(output.matches('\x0c').count(), 3);
    }

    #[test]
    fn test_render_reports_fallback_path() {
        let rendered = browser().render("#/orchestrator/bogus");
        assert_eq!(rendered.kind, ViewKind::Service);
        assert_eq!(rendered.canonical_path, "/orchestrator");
    }
}
