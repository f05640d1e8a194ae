//! Root lookup tables: `dist/index.js` and `dist/index.d.ts`.
//!
//! ```js
//! export const CATEGORY_BY_ICON_NAME = { "arrow-up": "arrows" };
//! export const MONOCHROME_ICON_NAMES = [ "arrow-up" ];
//! export const COLOR_ICONS_LIST = [ "flag-uk.svg" ];
//! ```
//!
//! The declaration file lists every mapping key as a literal, so the
//! derived `MonochromeIconName` / `ColorIconName` unions stay exact.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use super::{
    AUTO_GENERATED_BANNER,
    js::{double_quoted, json_pretty},
};
use crate::{
    icon::{ColorLibrary, MonochromeLibrary},
    utils::fs::write_file,
};

/// Runtime values for `index.js`.
pub fn index_js(monochrome: &MonochromeLibrary, color: &ColorLibrary) -> Result<String> {
    let registry = monochrome.category_by_icon_name();
    let names: Vec<&str> = registry.names().collect();

    Ok(format!(
        "{AUTO_GENERATED_BANNER}\n\
         export const CATEGORY_BY_ICON_NAME = {};\n\n\
         export const MONOCHROME_ICON_NAMES = {};\n\n\
         export const COLOR_ICONS_LIST = {};\n",
        json_pretty(registry.as_json())?,
        json_pretty(&names)?,
        json_pretty(&color.file_names())?,
    ))
}

/// Type declarations for `index.d.ts`.
pub fn index_dts(monochrome: &MonochromeLibrary, color: &ColorLibrary) -> String {
    let mut entries = String::new();
    for (name, category) in monochrome.category_by_icon_name().entries() {
        let _ = writeln!(
            entries,
            "    readonly {}: {};",
            double_quoted(name),
            double_quoted(category)
        );
    }

    let color_list = color
        .icons()
        .iter()
        .map(|icon| double_quoted(&icon.file_name()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{AUTO_GENERATED_BANNER}\n\n\
         export declare const CATEGORY_BY_ICON_NAME: {{\n{entries}}};\n\n\
         export declare const MONOCHROME_ICON_NAMES: readonly MonochromeIconName[];\n\n\
         export declare const COLOR_ICONS_LIST: readonly [{color_list}];\n\n\
         export type MonochromeIconName = keyof typeof CATEGORY_BY_ICON_NAME;\n\
         export type ColorIconName = typeof COLOR_ICONS_LIST[number];\n"
    )
}

/// Write both index files into `dist`.
pub fn write_index(dist: &Path, monochrome: &MonochromeLibrary, color: &ColorLibrary) -> Result<()> {
    write_file(&dist.join("index.js"), index_js(monochrome, color)?)?;
    write_file(&dist.join("index.d.ts"), index_dts(monochrome, color))
}
