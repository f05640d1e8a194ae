//! Build orchestration.
//!
//! ```text
//! scan monochrome ─┐
//! scan color ──────┴─> clean dist ─> svg files ─> category modules ─> color files ─> index
//! ```
//!
//! Every source name is validated during the scans, so an invalid tree
//! aborts before `dist/` is touched.

use anyhow::Result;
use std::time::Instant;

use crate::{
    config::IconsConfig,
    generator::{index::write_index, module::write_category_modules, svg},
    icon::{
        IconRules,
        scan::{scan_color, scan_monochrome},
    },
    log,
    logger::{elapsed_ms, plural_count},
    utils::fs::clean_dir,
};

/// Counts reported after a successful build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub categories: usize,
    pub monochrome: usize,
    pub color: usize,
}

/// Rebuild the whole `dist/` tree from the icon sources.
pub fn build_icons(config: &IconsConfig) -> Result<BuildSummary> {
    let start = Instant::now();
    log!("build"; "starting build");

    let rules = IconRules::from_config(config)?;
    let paths = &config.paths;

    let monochrome = scan_monochrome(&paths.monochrome_source(), &rules)?;
    let color = scan_color(&paths.color_source(), &rules)?;
    log!("scan"; "found {} and {}",
        plural_count(monochrome.icon_count(), "monochrome icon"),
        plural_count(color.len(), "color icon"));

    clean_dir(&paths.dist)?;

    let step = Instant::now();
    let written = svg::write_monochrome(&monochrome, &paths.monochrome_dist())?;
    log!("monochrome"; "converted {} in {} ms", plural_count(written, "monochrome icon"), elapsed_ms(step));

    let step = Instant::now();
    let constants = write_category_modules(&monochrome, &paths.monochrome_dist())?;
    log!("modules"; "prepared consts for {} in {} ms", plural_count(constants, "monochrome icon"), elapsed_ms(step));

    let copied = svg::write_color(&color, &paths.color_dist())?;
    log!("color"; "finished generating {}", plural_count(copied, "color icon"));

    write_index(&paths.dist, &monochrome, &color)?;
    log!("index"; "generated index files");

    log!("build"; "completed in {} ms -> {}", elapsed_ms(start), config.root_relative(&paths.dist).display());

    Ok(BuildSummary {
        categories: monochrome.categories().len(),
        monochrome: written,
        color: copied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconError;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: impl AsRef<[u8]>) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Project with empty `src/monochrome` and `src/color`.
    fn project() -> (TempDir, IconsConfig) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/monochrome")).unwrap();
        fs::create_dir_all(temp.path().join("src/color")).unwrap();
        let config = IconsConfig::with_root(temp.path());
        (temp, config)
    }

    #[test]
    fn test_build_end_to_end() {
        let (temp, config) = project();
        let root = temp.path();
        write(
            root,
            "src/monochrome/Arrows/arrow_up_24px.svg",
            r##"<svg width="24" fill="#000"><path d="M0 0"/></svg>"##,
        );

        let summary = build_icons(&config).unwrap();
        assert_eq!(
            summary,
            BuildSummary {
                categories: 1,
                monochrome: 1,
                color: 0
            }
        );

        let svg = fs::read_to_string(root.join("dist/monochrome/arrows/arrow-up.svg")).unwrap();
        assert_eq!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#
        );

        let index = fs::read_to_string(root.join("dist/index.js")).unwrap();
        assert!(index.contains("export const CATEGORY_BY_ICON_NAME = {\n    \"arrow-up\": \"arrows\"\n};"));
        assert!(index.contains("export const COLOR_ICONS_LIST = [];"));

        let module = fs::read_to_string(root.join("dist/monochrome/arrows/index.js")).unwrap();
        assert!(module.starts_with("export const iconArrowUp = `<path d=\"M0 0\"/>`;\n"));
        assert!(root.join("dist/monochrome/arrows/index.d.ts").is_file());
        assert!(root.join("dist/monochrome/index.js").is_file());
        assert!(root.join("dist/index.d.ts").is_file());
    }

    #[test]
    fn test_build_duplicate_names_abort_without_writing() {
        let (temp, config) = project();
        let root = temp.path();
        write(root, "src/monochrome/A/icon.svg", "<svg><path d=\"A\"/></svg>");
        write(root, "src/monochrome/B/icon.svg", "<svg><path d=\"B\"/></svg>");

        let err = build_icons(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<IconError>(),
            Some(&IconError::DuplicateName {
                name: "icon".into(),
                category: "b".into(),
                existing: "a".into(),
            })
        );
        assert!(!root.join("dist/monochrome/b/icon.svg").exists());
    }

    #[test]
    fn test_build_cyrillic_name_aborts_before_any_write() {
        let (temp, config) = project();
        let root = temp.path();
        write(root, "src/monochrome/Arrows/up.svg", "<svg/>");
        write(root, "src/color/флаг.svg", "<svg/>");

        let err = build_icons(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IconError>(),
            Some(IconError::InvalidName(_))
        ));
        assert!(!root.join("dist").exists());
    }

    #[test]
    fn test_build_failure_keeps_previous_dist() {
        let (temp, config) = project();
        let root = temp.path();
        write(root, "src/monochrome/Arrows/up.svg", "<svg/>");
        build_icons(&config).unwrap();

        write(root, "src/monochrome/Other/up.svg", "<svg/>");
        assert!(build_icons(&config).is_err());
        assert!(root.join("dist/monochrome/arrows/up.svg").is_file());
    }

    #[test]
    fn test_build_color_round_trip() {
        let (temp, config) = project();
        let root = temp.path();
        let raw = b"<svg fill=\"#f00\" width=\"24\">\r\n  <path d=\"M0\"/>\n</svg>\n";
        write(root, "src/color/flag_uk_24px.svg", raw);
        write(root, "src/color/apple.svg", "<svg/>");

        let summary = build_icons(&config).unwrap();
        assert_eq!(summary.color, 2);

        assert_eq!(fs::read(root.join("dist/color/flag-uk.svg")).unwrap(), raw);
        let index = fs::read_to_string(root.join("dist/index.js")).unwrap();
        assert!(index.contains(
            "export const COLOR_ICONS_LIST = [\n    \"apple.svg\",\n    \"flag-uk.svg\"\n];"
        ));
    }

    #[test]
    fn test_build_clears_stale_output() {
        let (temp, config) = project();
        let root = temp.path();
        write(root, "dist/monochrome/old/stale.svg", "<svg/>");
        write(root, "src/monochrome/Arrows/up.svg", "<svg/>");

        build_icons(&config).unwrap();

        assert!(!root.join("dist/monochrome/old").exists());
        assert!(root.join("dist/monochrome/arrows/up.svg").is_file());
    }

    #[test]
    fn test_build_empty_sources() {
        let (temp, config) = project();

        let summary = build_icons(&config).unwrap();

        assert_eq!(summary, BuildSummary::default());
        let index = fs::read_to_string(temp.path().join("dist/index.js")).unwrap();
        assert!(index.contains("export const CATEGORY_BY_ICON_NAME = {};"));
        assert!(index.contains("export const COLOR_ICONS_LIST = [];"));
    }

    #[test]
    fn test_build_missing_color_source_fails() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/monochrome")).unwrap();
        let config = IconsConfig::with_root(temp.path());

        let err = build_icons(&config).unwrap_err();
        assert!(err.to_string().contains("color"));
    }
}
