//! Writes scanned icons into the destination tree.

use anyhow::Result;
use std::path::Path;

use crate::{
    icon::{ColorLibrary, MonochromeLibrary},
    utils::fs::{ensure_dir, write_file},
};

/// Write `<dest>/<category>/<icon>.svg` for every monochrome icon.
///
/// Returns the number of files written.
pub fn write_monochrome(library: &MonochromeLibrary, dest: &Path) -> Result<usize> {
    ensure_dir(dest)?;

    for category in library.categories() {
        let category_dir = dest.join(&category.name);
        ensure_dir(&category_dir)?;

        for icon in &category.icons {
            write_file(&category_dir.join(icon.file_name()), &icon.markup)?;
        }
    }

    Ok(library.icon_count())
}

/// Copy every color icon verbatim to `<dest>/<icon>.svg`.
pub fn write_color(library: &ColorLibrary, dest: &Path) -> Result<usize> {
    ensure_dir(dest)?;

    for icon in library.icons() {
        write_file(&dest.join(icon.file_name()), &icon.bytes)?;
    }

    Ok(library.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::{CanonicalIcon, ColorIcon, normalize::wrap_svg_shell};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_monochrome_layout() {
        let library = MonochromeLibrary::default()
            .insert(CanonicalIcon {
                name: "arrow-up".into(),
                category: Some("arrows".into()),
                markup: wrap_svg_shell("<path/>"),
            })
            .unwrap();

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("monochrome");
        assert_eq!(write_monochrome(&library, &dest).unwrap(), 1);

        let written = fs::read_to_string(dest.join("arrows/arrow-up.svg")).unwrap();
        assert_eq!(written, wrap_svg_shell("<path/>"));
    }

    #[test]
    fn test_write_color_is_byte_exact() {
        let bytes = b"<svg fill=\"#f00\">\r\n\xef\xbb\xbf</svg>\n".to_vec();
        let library = ColorLibrary::default()
            .insert(ColorIcon {
                name: "flag".into(),
                bytes: bytes.clone(),
            })
            .unwrap();

        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("color");
        write_color(&library, &dest).unwrap();

        assert_eq!(fs::read(dest.join("flag.svg")).unwrap(), bytes);
    }
}
