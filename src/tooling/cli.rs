//! CLI Tooling
//!
//! Command-line interface for rendering, browsing, and publishing command
//! documentation. Every rendering command goes through the same
//! resolve-then-render pipeline as the static site.

use crate::browser::{DocBrowser, WriterSink};
use crate::config::{ConfigLoader, DocsConfig};
use crate::error::DocError;
use crate::logging::LoggingConfig;
use crate::render::render_error;
use crate::site::SiteBuilder;
use crate::tooling::format::{format_issues_text, format_site_report_text, format_tree_text};
use crate::tree::{load_from_path, validate, walk, CommandNode};
use crate::watch::{WatchConfig, WatchDaemon};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// cmddoc - Breadcrumb documentation browser for CLI command trees
#[derive(Parser)]
#[command(name = "cmddoc")]
#[command(about = "Render and browse documentation for a CLI command tree")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Command tree JSON (overrides the configured source)
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags into the configured logging settings.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        base.clone().with_overrides(
            self.log_level.as_deref(),
            self.log_format.as_deref(),
            self.log_output.as_deref(),
            self.log_file.clone(),
        )
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the view for a fragment path (e.g. "#/orchestrator/users/get")
    Render {
        /// Fragment path; the root view when omitted
        path: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Read navigation events (one fragment path per line) from stdin and
    /// write each rendered view to stdout
    Browse {
        /// Fragment shown before the first event
        #[arg(long, default_value = "")]
        initial: String,
    },
    /// Write the static documentation site
    Build {
        /// Output directory (overrides the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Build the site and rebuild whenever the command tree changes
    Watch {
        /// Output directory (overrides the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Debounce window in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// List the command tree
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Deepest level to list (0 = root only)
        #[arg(long)]
        depth: Option<usize>,
    },
    /// Check the command tree for duplicate or empty names
    Validate {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Render { .. } => "render",
            Commands::Browse { .. } => "browse",
            Commands::Build { .. } => "build",
            Commands::Watch { .. } => "watch",
            Commands::Show { .. } => "show",
            Commands::Validate { .. } => "validate",
        }
    }
}

/// CLI context: resolved configuration and paths for one invocation.
pub struct CliContext {
    workspace_root: PathBuf,
    config: DocsConfig,
    source: PathBuf,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        source_override: Option<PathBuf>,
    ) -> Result<Self, DocError> {
        let config = if let Some(cfg_path) = &config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        let source = match source_override {
            Some(path) if path.is_absolute() => path,
            Some(path) => workspace_root.join(path),
            None => config.source_path(&workspace_root),
        };

        Ok(Self {
            workspace_root,
            config,
            source,
        })
    }

    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn load_tree(&self) -> Result<Arc<CommandNode>, DocError> {
        load_from_path(&self.source).map(Arc::new)
    }

    fn output_dir(&self, out: &Option<PathBuf>) -> PathBuf {
        match out {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.workspace_root.join(path),
            None => self.config.output_path(&self.workspace_root),
        }
    }

    /// Execute a CLI command
    ///
    /// `browse` reads stdin and writes stdout directly; every other command
    /// returns its output for the caller to print.
    pub fn execute(&self, command: &Commands) -> Result<String, DocError> {
        let started = Instant::now();
        let result = match command {
            Commands::Render { path, format } => {
                self.handle_render(path.as_deref().unwrap_or(""), format)
            }
            Commands::Browse { initial } => {
                let stdin = std::io::stdin();
                let stdout = std::io::stdout();
                self.browse(initial, stdin.lock(), stdout.lock())
                    .map(|_| String::new())
            }
            Commands::Build { out, format } => self.handle_build(out, format),
            Commands::Watch { out, debounce_ms } => self.handle_watch(out, *debounce_ms),
            Commands::Show { format, depth } => self.handle_show(format, *depth),
            Commands::Validate { format } => self.handle_validate(format),
        };
        info!(
            command = command.name(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    /// Mount a browser on `out` and follow navigation events from `events`.
    ///
    /// A tree that cannot be loaded is reported in the container before the
    /// error is returned.
    pub fn browse<R: BufRead, W: Write>(
        &self,
        initial: &str,
        events: R,
        mut out: W,
    ) -> Result<usize, DocError> {
        let tree = match self.load_tree() {
            Ok(tree) => tree,
            Err(e) => {
                out.write_all(render_error(&e.to_string()).as_bytes())?;
                out.flush()?;
                return Err(e);
            }
        };
        let mut mounted = DocBrowser::new(tree).mount(WriterSink::new(out), initial)?;
        mounted.follow(events)
    }

    fn handle_render(&self, path: &str, format: &str) -> Result<String, DocError> {
        let browser = DocBrowser::new(self.load_tree()?);
        let rendered = browser.render(path);
        match format {
            "json" => {
                let value = json!({
                    "path": path,
                    "view": rendered.kind,
                    "canonical_path": rendered.canonical_path,
                    "html": rendered.html,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            "text" => Ok(rendered.html),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_build(&self, out: &Option<PathBuf>, format: &str) -> Result<String, DocError> {
        let output_dir = self.output_dir(out);
        let report = SiteBuilder::new(self.load_tree()?).build(&output_dir)?;
        match format {
            "json" => Ok(serde_json::to_string_pretty(&report)?),
            "text" => Ok(format_site_report_text(&report)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_watch(
        &self,
        out: &Option<PathBuf>,
        debounce_ms: Option<u64>,
    ) -> Result<String, DocError> {
        let daemon = WatchDaemon::new(WatchConfig {
            source: self.source.clone(),
            output_dir: self.output_dir(out),
            debounce_ms: debounce_ms.unwrap_or(self.config.watch.debounce_ms),
        });
        daemon.start()?;
        Ok("Watch stopped".to_string())
    }

    fn handle_show(&self, format: &str, depth: Option<usize>) -> Result<String, DocError> {
        let tree = self.load_tree()?;
        let entries: Vec<_> = walk(&tree)
            .into_iter()
            .filter(|e| depth.map_or(true, |d| e.depth <= d))
            .collect();
        match format {
            "json" => {
                let rows: Vec<_> = entries
                    .iter()
                    .map(|e| {
                        json!({
                            "path": e.path(),
                            "level": e.level(),
                            "parameters": e.node.parameters.len(),
                            "description": e.node.description,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "total": rows.len(),
                    "commands": rows,
                }))?)
            }
            "text" => Ok(format_tree_text(&tree.name, &entries)),
            other => Err(invalid_format(other)),
        }
    }

    fn handle_validate(&self, format: &str) -> Result<String, DocError> {
        let tree = self.load_tree()?;
        let issues = validate(&tree);
        match format {
            "json" => Ok(serde_json::to_string_pretty(&json!({
                "valid": issues.is_empty(),
                "issues": issues,
            }))?),
            "text" => Ok(format_issues_text(&issues)),
            other => Err(invalid_format(other)),
        }
    }
}

fn invalid_format(format: &str) -> DocError {
    DocError::ConfigError(format!(
        "Invalid output format: {} (must be 'text' or 'json')",
        format
    ))
}
