//! SVG text normalization.
//!
//! Raw icon markup is reduced to its inner content and re-wrapped in a
//! fixed root element:
//!
//! ```text
//! <svg width="24" fill="#000">\n  <path d="M0 0"/>\n</svg>
//!   -> <svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>
//! ```
//!
//! Rewriting is regex based. The result is not checked for well-formedness,
//! and attribute patterns may also match inside text content.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Opening `<svg ...>` tags, closing `</svg>` tags and newlines.
///
/// `[^>]*` keeps a match inside a single tag.
static SVG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<svg[^>]*>)|(</svg>)|\n").unwrap());

/// Remove every `<svg>`/`</svg>` tag and newline, then trim.
pub fn strip_svg_tags(raw: &str) -> String {
    SVG_TAG.replace_all(raw, "").trim().to_string()
}

/// Wrap inner content in the canonical root element.
pub fn wrap_svg_shell(inner: &str) -> String {
    format!(r#"<svg xmlns="{SVG_NAMESPACE}">{inner}</svg>"#)
}

/// Inner content of shell-normalized markup.
pub fn unwrap_svg_shell(markup: &str) -> String {
    strip_svg_tags(markup)
}

/// Removes a fixed set of presentation attributes from markup.
#[derive(Debug, Clone)]
pub struct AttrCleaner {
    patterns: Vec<Regex>,
}

impl AttrCleaner {
    /// Compile one pattern per attribute name.
    pub fn new<S: AsRef<str>>(attrs: &[S]) -> Result<Self> {
        let patterns = attrs
            .iter()
            .map(|attr| {
                let attr = attr.as_ref();
                let pattern = format!(
                    r#"(?:^|\s+){}\s*=\s*(?:"[^"]*"|'[^']*')"#,
                    regex::escape(attr)
                );
                Regex::new(&pattern).with_context(|| format!("invalid attribute name `{attr}`"))
            })
            .collect::<Result<_>>()?;
        Ok(Self { patterns })
    }

    /// Strip every listed attribute on every element.
    pub fn clean(&self, markup: &str) -> String {
        self.patterns
            .iter()
            .fold(markup.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
    }
}

/// Full markup normalization: strip tags, wrap, clean attributes.
#[derive(Debug, Clone)]
pub struct Normalizer {
    cleaner: AttrCleaner,
}

impl Normalizer {
    pub fn new(cleaner: AttrCleaner) -> Self {
        Self { cleaner }
    }

    /// Normalize raw file content into single-line shell-normalized markup.
    ///
    /// Attributes are cleaned before newlines are dropped as well, since an
    /// attribute starting a line loses its leading whitespace once joined.
    pub fn normalize(&self, raw: &[u8]) -> String {
        let raw = self.cleaner.clean(&String::from_utf8_lossy(raw));
        let wrapped = wrap_svg_shell(&strip_svg_tags(&raw));
        self.cleaner.clean(&wrapped)
    }
}
