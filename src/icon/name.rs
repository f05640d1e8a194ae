//! Identifier derivation for icons and categories.
//!
//! Two kinds of names are derived from raw source names:
//!
//! | Input                 | Canonical name | Code identifier  |
//! |-----------------------|----------------|------------------|
//! | `arrow_up_24px.svg`   | `arrow-up`     | `iconArrowUp`    |
//! | `Arrow Keys` (dir)    | `arrow-keys`   | `arrowKeysIcons` |
//!
//! Separator replacement covers every occurrence, in file names and
//! directory names alike.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `_` or whitespace in source names.
static NAME_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_|\s").unwrap());

/// `-`, `_` or whitespace in canonical names, turned into word breaks.
static WORD_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-|_|\s").unwrap());

/// Whitespace followed by the character to capitalize.
static CAMEL_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s(.)").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

/// Derives canonical icon names from source file names.
#[derive(Debug, Clone)]
pub struct NameDeriver {
    /// Matches the trailing `(<size suffix>)?.svg` of a lowercased file name.
    file_suffix: Regex,
}

impl NameDeriver {
    /// Build a deriver that strips `size_suffix` (e.g. `_24px`) before `.svg`.
    pub fn new(size_suffix: &str) -> Result<Self> {
        let pattern = if size_suffix.is_empty() {
            r"\.svg$".to_string()
        } else {
            format!(
                r"({})?\.svg$",
                regex::escape(&size_suffix.to_lowercase())
            )
        };
        let file_suffix = Regex::new(&pattern)
            .with_context(|| format!("invalid size suffix `{size_suffix}`"))?;
        Ok(Self { file_suffix })
    }

    /// `arrow_up_24px.svg` → `arrow-up`.
    pub fn canonical_name(&self, file_name: &str) -> String {
        let lower = file_name.to_lowercase();
        let stem = self.file_suffix.replace(&lower, "");
        NAME_SEPARATOR.replace_all(&stem, "-").into_owned()
    }
}

/// Whether a file name carries the `.svg` extension (any case).
pub fn is_svg_file(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(".svg")
}

/// `Arrow Keys` → `arrow-keys`.
pub fn category_name(dir_name: &str) -> String {
    NAME_SEPARATOR
        .replace_all(&dir_name.to_lowercase(), "-")
        .into_owned()
}

/// Camel-case a space separated phrase: `icon arrow up` → `iconArrowUp`.
///
/// The character after each whitespace is uppercased, whitespace is
/// dropped and the very first character is lowercased.
pub fn camelize(phrase: &str) -> String {
    let capitalized = CAMEL_BREAK.replace_all(phrase, |caps: &regex::Captures<'_>| {
        caps[0].to_uppercase()
    });
    let joined = WHITESPACE.replace_all(&capitalized, "");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Variable name of a category descriptor: `arrow-keys` → `arrowKeysIcons`.
pub fn category_var_name(category: &str) -> String {
    let lower = category.to_lowercase();
    let words = WORD_SEPARATOR.replace_all(&lower, " ");
    camelize(&format!("{words}Icons"))
}

/// Variable name of an icon constant: `arrow-up` → `iconArrowUp`.
pub fn icon_var_name(icon: &str) -> String {
    let words = WORD_SEPARATOR.replace_all(icon, " ");
    camelize(&format!("icon {words}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deriver() -> NameDeriver {
        NameDeriver::new("_24px").unwrap()
    }

    #[test]
    fn test_canonical_name() {
        let d = deriver();
        assert_eq!(d.canonical_name("arrow_up_24px.svg"), "arrow-up");
        assert_eq!(d.canonical_name("Arrow_Up.svg"), "arrow-up");
        assert_eq!(d.canonical_name("ARROW_UP_24PX.SVG"), "arrow-up");
        assert_eq!(d.canonical_name("close icon.svg"), "close-icon");
        assert_eq!(d.canonical_name("a_b c_d_24px.svg"), "a-b-c-d");
    }

    #[test]
    fn test_canonical_name_suffix_only_at_end() {
        let d = deriver();
        assert_eq!(d.canonical_name("size_24px_wide.svg"), "size-24px-wide");
        assert_eq!(d.canonical_name("icon.svg.svg"), "icon.svg");
    }

    #[test]
    fn test_canonical_name_custom_suffix() {
        let d = NameDeriver::new("@2x").unwrap();
        assert_eq!(d.canonical_name("logo@2x.svg"), "logo");

        let d = NameDeriver::new("").unwrap();
        assert_eq!(d.canonical_name("logo_24px.svg"), "logo-24px");
    }

    #[test]
    fn test_category_name_replaces_all_separators() {
        assert_eq!(category_name("Arrows"), "arrows");
        assert_eq!(category_name("Arrow Keys"), "arrow-keys");
        assert_eq!(category_name("a_b c"), "a-b-c");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("icon arrow up"), "iconArrowUp");
        assert_eq!(camelize("Arrows"), "arrows");
        assert_eq!(camelize(""), "");
        assert_eq!(camelize("icon 24 hours"), "icon24Hours");
    }

    #[test]
    fn test_var_names() {
        assert_eq!(category_var_name("arrows"), "arrowsIcons");
        assert_eq!(category_var_name("arrow-keys"), "arrowKeysIcons");
        assert_eq!(category_var_name("a-b-c"), "aBCIcons");
        assert_eq!(icon_var_name("arrow-up"), "iconArrowUp");
        assert_eq!(icon_var_name("x"), "iconX");
    }

    #[test]
    fn test_is_svg_file() {
        assert!(is_svg_file("a.svg"));
        assert!(is_svg_file("A.SVG"));
        assert!(!is_svg_file("readme.md"));
    }
}
