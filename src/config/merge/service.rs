//! MergeService: orchestrates sources, applies merge policy, deserializes to DocsConfig.

use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::DocsConfig;
use config::{ConfigError, File};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from workspace and standard sources.
    /// Precedence: global file (lowest) -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<DocsConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<DocsConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path.to_path_buf()).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("cmddoc.toml"),
            "source = \"docs/commands.json\"\n\n[watch]\ndebounce_ms = 50\n",
        )
        .unwrap();

        let config = MergeService::load(temp.path()).unwrap();
        assert_eq!(config.source, PathBuf::from("docs/commands.json"));
        assert_eq!(config.output_dir, PathBuf::from("site"));
        assert_eq!(config.watch.debounce_ms, 50);
        assert_eq!(config.logging.output, "stderr");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(MergeService::load_from_file(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_load_from_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        std::fs::write(&path, "output_dir = \"public\"\n[logging]\nlevel = \"debug\"\n").unwrap();

        let config = MergeService::load_from_file(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("public"));
        assert_eq!(config.logging.level, "debug");
    }
}
