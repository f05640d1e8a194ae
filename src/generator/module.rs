//! Per-category JavaScript modules and type declarations.
//!
//! ```text
//! dist/monochrome/
//! ├── arrows/
//! │   ├── arrow-up.svg
//! │   ├── index.js      # export const iconArrowUp = `...`; export const arrowsIcons = {...}
//! │   └── index.d.ts
//! ├── index.js          # import { arrowsIcons } from './arrows'; export const icons = [...]
//! └── index.d.ts
//! ```
//!
//! Generated from the in-memory library, so constants always match the
//! `.svg` files written in the same build.

use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

use super::js::{single_quoted, template_literal};
use crate::{
    icon::{CategoryDescriptor, MonochromeLibrary},
    utils::fs::{ensure_dir, write_file},
};

const ROOT_MODULE_DTS: &str = "export declare const icons: ReadonlyArray<{ name: string; shapes: { [key: string]: string } }>;\n";

/// Write every category module plus the root aggregator.
///
/// Returns the number of icon constants emitted.
pub fn write_category_modules(library: &MonochromeLibrary, dest: &Path) -> Result<usize> {
    let mut count = 0;

    for category in library.categories() {
        let dir = dest.join(&category.name);
        ensure_dir(&dir)?;
        write_file(&dir.join("index.js"), category_module_js(category))?;
        write_file(&dir.join("index.d.ts"), category_module_dts(category))?;
        count += category.icons.len();
    }

    ensure_dir(dest)?;
    write_file(&dest.join("index.js"), root_module_js(library))?;
    write_file(&dest.join("index.d.ts"), ROOT_MODULE_DTS)?;

    Ok(count)
}

fn category_module_js(category: &CategoryDescriptor) -> String {
    let mut constants = String::new();
    let mut shapes = String::new();

    for icon in &category.icons {
        let var = icon.var_name();
        let _ = writeln!(constants, "export const {var} = {};", template_literal(&icon.body()));
        let _ = writeln!(shapes, "    {}: {var},", single_quoted(&icon.name));
    }

    format!(
        "{constants}\nexport const {} = {{\n  name: {},\n  shapes: {{\n{shapes}  }}\n}};\n",
        category.var_name(),
        single_quoted(&category.name),
    )
}

fn category_module_dts(category: &CategoryDescriptor) -> String {
    let mut out = String::new();
    for icon in &category.icons {
        let _ = writeln!(out, "export declare const {}: string;", icon.var_name());
    }

    let _ = write!(
        out,
        "\nexport declare const {}: {{\n  name: string;\n  shapes: {{\n    [key: string]: string;\n  }};\n}};\n",
        category.var_name()
    );
    out
}

fn root_module_js(library: &MonochromeLibrary) -> String {
    let mut out = String::new();
    let mut vars = Vec::with_capacity(library.categories().len());

    for category in library.categories() {
        let var = category.var_name();
        let _ = writeln!(
            out,
            "import {{ {var} }} from {};",
            single_quoted(&format!("./{}", category.name))
        );
        vars.push(var);
    }

    let _ = writeln!(out, "\nexport const icons = [ {} ];", vars.join(", "));
    out
}
