//! Gallery data assembly from a built `dist/` tree.
//!
//! ```text
//! gallery/
//! ├── icons-data.js   # const iconsData = { CATEGORY_BY_ICON_NAME, COLOR_ICONS_LIST }
//! └── dist/           # copy of dist/
//! ```

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::{fs, path::Path};

use crate::{
    config::IconsConfig,
    generator::js::json_pretty,
    icon::name::is_svg_file,
    log,
    logger::plural_count,
    utils::fs::{copy_dir_recursively, ensure_dir, sorted_entries, write_file},
};

pub const GALLERY_DATA_FILE: &str = "icons-data.js";

/// Write gallery data and mirror `dist/` into the gallery directory.
pub fn build_gallery(config: &IconsConfig) -> Result<()> {
    let paths = &config.paths;
    if !paths.dist.is_dir() {
        bail!(
            "dist directory '{}' not found, run `iconforge build` first",
            paths.dist.display()
        );
    }

    log!("gallery"; "building gallery");
    ensure_dir(&paths.gallery)?;

    let monochrome = monochrome_icons(&paths.monochrome_dist())?;
    let color = color_icons(&paths.color_dist())?;
    write_file(
        &paths.gallery.join(GALLERY_DATA_FILE),
        gallery_data_js(&monochrome, &color)?,
    )?;
    log!("gallery"; "generated gallery data ({}, {})",
        plural_count(monochrome.len(), "monochrome icon"),
        plural_count(color.len(), "color icon"));

    let target = paths.gallery.join("dist");
    if target.exists() {
        fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to remove '{}'", target.display()))?;
    }
    let copied = copy_dir_recursively(&paths.dist, &target)?;
    log!("gallery"; "copied {} to {}", plural_count(copied, "file"), config.root_relative(&target).display());

    Ok(())
}

/// `<icon>` → `<category>` for every `<dir>/<category>/<icon>.svg`.
fn monochrome_icons(dir: &Path) -> Result<Map<String, Value>> {
    let mut icons = Map::new();
    if !dir.is_dir() {
        return Ok(icons);
    }

    for category_dir in sorted_entries(dir)?.iter().filter(|p| p.is_dir()) {
        let category = file_name(category_dir);
        for file in svg_files(category_dir)? {
            let name = file.strip_suffix(".svg").unwrap_or(&file).to_string();
            icons.insert(name, Value::String(category.clone()));
        }
    }
    Ok(icons)
}

/// `<icon>.svg` file names directly inside `dir`.
fn color_icons(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    svg_files(dir)
}

fn svg_files(dir: &Path) -> Result<Vec<String>> {
    Ok(sorted_entries(dir)?
        .iter()
        .filter(|p| p.is_file())
        .map(|p| file_name(p))
        .filter(|name| is_svg_file(name))
        .collect())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn gallery_data_js(monochrome: &Map<String, Value>, color: &[String]) -> Result<String> {
    Ok(format!(
        "// Auto-generated gallery data\n\
         const iconsData = {{\n    \
         CATEGORY_BY_ICON_NAME: {},\n    \
         COLOR_ICONS_LIST: {}\n\
         }};\n",
        json_pretty(monochrome)?,
        json_pretty(color)?,
    ))
}
