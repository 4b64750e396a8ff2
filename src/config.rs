//! Configuration
//!
//! Layered with the `config` crate: built-in defaults, the global file
//! (`$XDG_CONFIG_HOME/cmddoc/config.toml`), the workspace file
//! (`cmddoc.toml`), then `CMDDOC__*` environment variables.

mod facade;
mod merge;
pub mod paths;
mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const WORKSPACE_CONFIG_FILE: &str = "cmddoc.toml";

fn default_source() -> PathBuf {
    PathBuf::from("commands.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("site")
}

fn default_debounce_ms() -> u64 {
    200
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsConfig {
    /// Command tree JSON (relative to the workspace root)
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// Site output directory (relative to the workspace root)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub watch: WatchSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Quiet period after the last change before rebuilding
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
            watch: WatchSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl DocsConfig {
    pub fn source_path(&self, workspace_root: &Path) -> PathBuf {
        resolve_against(workspace_root, &self.source)
    }

    pub fn output_path(&self, workspace_root: &Path) -> PathBuf {
        resolve_against(workspace_root, &self.output_dir)
    }
}

fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocsConfig::default();
        assert_eq!(config.source, PathBuf::from("commands.json"));
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.watch.debounce_ms, 200);
    }

    #[test]
    fn test_paths_resolve_against_workspace() {
        let config = DocsConfig::default();
        let root = Path::new("/work");
        assert_eq!(config.source_path(root), PathBuf::from("/work/commands.json"));

        let config = DocsConfig {
            output_dir: PathBuf::from("/srv/docs"),
            ..DocsConfig::default()
        };
        assert_eq!(config.output_path(root), PathBuf::from("/srv/docs"));
    }
}
