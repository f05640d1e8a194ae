//! Project configuration management for `iconforge.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── paths      # [paths]
//! ├── error          # ConfigError, ConfigDiagnostics
//! ├── util           # config file lookup
//! └── mod.rs         # IconsConfig (this file)
//! ```
//!
//! The config file is optional: without one every section uses its
//! defaults and the project root is the current directory.

mod error;
pub mod section;
mod util;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{BuildSectionConfig, PathsConfig};

use util::{absolute_path, find_config_file};

use crate::{cli::Cli, debug, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconforge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source, dist and gallery directories
    #[serde(default)]
    pub paths: PathsConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl IconsConfig {
    /// Load configuration from CLI arguments.
    ///
    /// With `--root`, the config file is looked up in that directory only.
    /// Otherwise it is searched upward from the current directory, and its
    /// parent becomes the project root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (root, config_path) = Self::resolve_root(cli)?;

        let mut config = if config_path.is_file() {
            debug!("config"; "loading {}", config_path.display());
            Self::from_path(&config_path)?
        } else {
            debug!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(&root);
        config.validate()?;
        Ok(config)
    }

    /// Default configuration rooted at `root`.
    #[cfg(test)]
    pub fn with_root(root: &Path) -> Self {
        let mut config = Self::default();
        config.finalize(root);
        config
    }

    fn resolve_root(cli: &Cli) -> Result<(PathBuf, PathBuf)> {
        if let Some(root) = &cli.root {
            let root = absolute_path(root);
            let config_path = root.join(&cli.config);
            return Ok((root, config_path));
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        match find_config_file(&cwd, &cli.config) {
            Some(path) => {
                let root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                Ok((root, path))
            }
            None => Ok((cwd.clone(), cwd.join(&cli.config))),
        }
    }

    /// Set the root and resolve every path against it.
    fn finalize(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.paths.normalize(root);
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get path relative to the project root, for log messages.
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.paths.validate(&self.root, &mut diag);
        self.build.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IconsConfig {
    let (parsed, ignored) = IconsConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
