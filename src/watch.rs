//! Watch mode: rebuild the site whenever the command tree file changes.

use crate::error::DocError;
use crate::site::{SiteBuilder, SiteReport};
use crate::tree::load_from_path;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// How often the loop wakes up to check the stop flag with nothing pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// Command tree JSON to watch
    pub source: PathBuf,
    /// Site output directory
    pub output_dir: PathBuf,
    /// Quiet period after the last change before rebuilding
    pub debounce_ms: u64,
}

/// Outcome of one rebuild attempt.
#[derive(Debug)]
pub enum RebuildOutcome {
    Built(SiteReport),
    /// The tree could not be loaded; the previous site is left in place.
    Kept(DocError),
}

/// Watch mode daemon
pub struct WatchDaemon {
    config: WatchConfig,
    running: Arc<AtomicBool>,
}

impl WatchDaemon {
    pub fn new(config: WatchConfig) -> Self {
        Self {
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that stops the loop when cleared from another thread.
    pub fn running_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.running)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Load the tree and build the site once.
    pub fn build_once(&self) -> Result<SiteReport, DocError> {
        let tree = load_from_path(&self.config.source)?;
        SiteBuilder::new(Arc::new(tree)).build(&self.config.output_dir)
    }

    /// Rebuild after a change. Load failures keep the last good site.
    pub fn rebuild(&self) -> Result<RebuildOutcome, DocError> {
        match self.build_once() {
            Ok(report) => Ok(RebuildOutcome::Built(report)),
            Err(e) if e.is_load_failure() => {
                warn!(
                    source = %self.config.source.display(),
                    error = %e,
                    "Command tree unreadable; keeping previous site"
                );
                Ok(RebuildOutcome::Kept(e))
            }
            Err(e) => Err(e),
        }
    }

    /// Build, then rebuild on every change until stopped.
    pub fn start(&self) -> Result<(), DocError> {
        self.running.store(true, Ordering::SeqCst);
        self.build_once()?;

        let watch_dir = self
            .config
            .source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            if let Err(e) = tx.send(res) {
                error!("Error sending watch event: {}", e);
            }
        })
        .map_err(|e| DocError::WatchError(format!("Failed to create watcher: {}", e)))?;

        // Editors often replace the file instead of writing it, so watch the
        // directory and filter by file name.
        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| DocError::WatchError(format!("Failed to watch directory: {}", e)))?;

        info!(source = %self.config.source.display(), "Watching command tree");

        let debounce = Duration::from_millis(self.config.debounce_ms);
        let mut last_change: Option<Instant> = None;

        while self.running.load(Ordering::SeqCst) {
            let timeout = match last_change {
                Some(at) => debounce.saturating_sub(at.elapsed()),
                None => IDLE_POLL,
            };
            match rx.recv_timeout(timeout) {
                Ok(Ok(event)) => {
                    if is_source_event(&event, &self.config.source) {
                        debug!(kind = ?event.kind, "Command tree changed");
                        last_change = Some(Instant::now());
                    }
                }
                Ok(Err(e)) => {
                    warn!("Watch error: {}", e);
                }
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watcher channel disconnected");
                    break;
                }
            }

            if let Some(at) = last_change {
                if at.elapsed() >= debounce {
                    last_change = None;
                    self.rebuild()?;
                }
            }
        }

        Ok(())
    }
}

/// Whether `event` touches the watched source file.
fn is_source_event(event: &Event, source: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Any
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some() && p.file_name() == source.file_name())
}
