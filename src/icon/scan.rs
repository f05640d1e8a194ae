//! Source tree scanning (reads only, writes nothing).
//!
//! ```text
//! src/
//! ├── monochrome/
//! │   ├── Arrows/
//! │   │   └── arrow_up_24px.svg   -> arrow-up (arrows)
//! │   └── Media Controls/
//! │       └── play.svg            -> play (media-controls)
//! └── color/
//!     └── flag_uk_24px.svg        -> flag-uk
//! ```
//!
//! Every name is validated and registered while scanning, so a bad source
//! tree fails before anything is written.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use super::{
    CanonicalIcon, ColorIcon, ColorLibrary, IconRules, MonochromeLibrary, name,
    validate::validated_name,
};
use crate::{
    debug, log,
    utils::fs::{is_hidden, sorted_entries},
};

/// Validated file name of a source entry, or `None` for dotfiles.
fn source_name(path: &Path) -> Result<Option<&str>> {
    if is_hidden(path) {
        return Ok(None);
    }
    let Some(raw) = path.file_name() else {
        return Ok(None);
    };
    Ok(Some(validated_name(raw)?))
}

/// Validated name of an svg source file, or `None` when it should be skipped.
fn svg_source_name<'a>(path: &'a Path, module: &str) -> Result<Option<&'a str>> {
    let Some(file_name) = source_name(path)? else {
        return Ok(None);
    };
    if path.is_dir() {
        debug!(module; "skipping directory {}", path.display());
        return Ok(None);
    }
    if !name::is_svg_file(file_name) {
        debug!(module; "skipping non-svg file {}", path.display());
        return Ok(None);
    }
    Ok(Some(file_name))
}

fn read_source(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read icon '{}'", path.display()))
}

/// Scan `<root>/<Category>/<icon>.svg` into a [`MonochromeLibrary`].
pub fn scan_monochrome(root: &Path, rules: &IconRules) -> Result<MonochromeLibrary> {
    let library = sorted_entries(root)?
        .iter()
        .try_fold(MonochromeLibrary::default(), |library, dir| {
            scan_category(library, dir, rules)
        })?;

    if library.is_empty() {
        log!("warning"; "monochrome source folder is empty: {}", root.display());
    }
    Ok(library)
}

fn scan_category(library: MonochromeLibrary, dir: &Path, rules: &IconRules) -> Result<MonochromeLibrary> {
    let Some(dir_name) = source_name(dir)? else {
        return Ok(library);
    };
    if !dir.is_dir() {
        return Ok(library);
    }

    let category = name::category_name(dir_name);
    debug!("monochrome"; "scanning {} -> {}", dir_name, category);

    sorted_entries(dir)?
        .iter()
        .try_fold(library, |library, path| -> Result<_> {
            let Some(file_name) = svg_source_name(path, "monochrome")? else {
                return Ok(library);
            };

            let raw = read_source(path)?;
            let icon = CanonicalIcon {
                name: rules.names.canonical_name(file_name),
                category: Some(category.clone()),
                markup: rules.normalizer.normalize(&raw),
            };
            Ok(library.insert(icon)?)
        })
}

/// Scan the flat `<dir>/<icon>.svg` color directory into a [`ColorLibrary`].
pub fn scan_color(dir: &Path, rules: &IconRules) -> Result<ColorLibrary> {
    let library = sorted_entries(dir)?
        .iter()
        .try_fold(ColorLibrary::default(), |library, path| -> Result<_> {
            let Some(file_name) = svg_source_name(path, "color")? else {
                return Ok(library);
            };

            let icon = ColorIcon {
                name: rules.names.canonical_name(file_name),
                bytes: read_source(path)?,
            };
            Ok(library.insert(icon)?)
        })?;

    if library.is_empty() {
        log!("warning"; "color source folder is empty: {}", dir.display());
    }
    Ok(library)
}
