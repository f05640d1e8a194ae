//! `[paths]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! source = "src"          # contains monochrome/ and color/
//! dist = "dist"           # deleted and regenerated by every build
//! gallery = "gallery"     # receives icons-data.js and a copy of dist/
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::ConfigDiagnostics;

/// Monochrome sources live under `<source>/monochrome`, output under `<dist>/monochrome`.
pub const MONOCHROME_DIR: &str = "monochrome";
/// Color sources live under `<source>/color`, output under `<dist>/color`.
pub const COLOR_DIR: &str = "color";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub source: PathBuf,
    pub dist: PathBuf,
    pub gallery: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source: "src".into(),
            dist: "dist".into(),
            gallery: "gallery".into(),
        }
    }
}

impl PathsConfig {
    /// Resolve relative paths against the project root.
    pub fn normalize(&mut self, root: &Path) {
        for path in [&mut self.source, &mut self.dist, &mut self.gallery] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
    }

    pub fn monochrome_source(&self) -> PathBuf {
        self.source.join(MONOCHROME_DIR)
    }

    pub fn color_source(&self) -> PathBuf {
        self.source.join(COLOR_DIR)
    }

    pub fn monochrome_dist(&self) -> PathBuf {
        self.dist.join(MONOCHROME_DIR)
    }

    pub fn color_dist(&self) -> PathBuf {
        self.dist.join(COLOR_DIR)
    }

    /// `dist/` is wiped on every build and mirrored into the gallery,
    /// so it must not contain, or be contained in, the other directories.
    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if root.starts_with(&self.dist) {
            diag.error_with_hint(
                "paths.dist",
                format!("`{}` would delete the project root", self.dist.display()),
                "use a dedicated output directory such as `dist`",
            );
        }
        if self.source.starts_with(&self.dist) || self.dist.starts_with(&self.source) {
            diag.error(
                "paths.dist",
                format!(
                    "`{}` overlaps the source directory `{}`",
                    self.dist.display(),
                    self.source.display()
                ),
            );
        }
        if self.gallery.starts_with(&self.dist) || self.dist.starts_with(&self.gallery) {
            diag.error(
                "paths.gallery",
                format!(
                    "`{}` overlaps the dist directory `{}`",
                    self.gallery.display(),
                    self.dist.display()
                ),
            );
        }
    }
}
