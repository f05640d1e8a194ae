//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! clean_attrs = ["fill"]  # attributes removed from monochrome markup
//! size_suffix = "_24px"   # stripped from file names before `.svg`
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::ConfigDiagnostics;

/// XML attribute names (optionally namespaced, e.g. `xlink:href`).
static ATTR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Presentation attributes stripped from every monochrome element.
    pub clean_attrs: Vec<String>,

    /// Size marker removed from source file names.
    pub size_suffix: String,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            clean_attrs: vec!["fill".to_string()],
            size_suffix: "_24px".to_string(),
        }
    }
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for attr in &self.clean_attrs {
            if !ATTR_NAME.is_match(attr) {
                diag.error_with_hint(
                    "build.clean_attrs",
                    format!("invalid attribute name `{attr}`"),
                    "use plain attribute names such as `fill` or `stroke`",
                );
            }
        }
        if self.size_suffix.to_lowercase().ends_with(".svg") {
            diag.error(
                "build.size_suffix",
                "the suffix must not include the `.svg` extension",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.clean_attrs, ["fill"]);
        assert_eq!(config.build.size_suffix, "_24px");
    }

    #[test]
    fn test_parse() {
        let config = test_parse_config(
            "[build]\nclean_attrs = [\"fill\", \"stroke\", \"xlink:href\"]\nsize_suffix = \"@2x\"",
        );
        assert_eq!(config.build.clean_attrs, ["fill", "stroke", "xlink:href"]);
        assert_eq!(config.build.size_suffix, "@2x");

        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_attr() {
        let config = test_parse_config("[build]\nclean_attrs = [\"fill\", \"1x\", \"a b\"]");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.errors().len(), 2);
    }

    #[test]
    fn test_validate_rejects_extension_in_suffix() {
        let config = test_parse_config("[build]\nsize_suffix = \"_24px.svg\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, "build.size_suffix");
    }
}
