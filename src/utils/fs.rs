//! File system helpers shared by the scanners and generators.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// List the direct children of `dir`, sorted by file name.
///
/// Sorting makes scan order, and therefore every generated list,
/// independent of the platform's directory read order.
pub fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Invalid entry in directory '{}'", dir.display()))?;

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Whether the final path component starts with `.`.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Create `dir` and its parents if missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))
}

/// Delete `dir` (if present) and recreate it empty.
pub fn clean_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir)
            .with_context(|| format!("Failed to remove directory '{}'", dir.display()))?;
    }
    ensure_dir(dir)
}

/// Write `contents` to `path`.
pub fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Copy `src` into `dst` recursively, returning the number of files copied.
pub fn copy_dir_recursively(src: &Path, dst: &Path) -> Result<usize> {
    ensure_dir(dst)?;

    let mut copied = 0;
    for entry_path in sorted_entries(src)? {
        let Some(name) = entry_path.file_name() else {
            continue;
        };
        let dest_path = dst.join(name);

        if entry_path.is_dir() {
            copied += copy_dir_recursively(&entry_path, &dest_path)?;
        } else {
            fs::copy(&entry_path, &dest_path).with_context(|| {
                format!(
                    "Failed to copy '{}' to '{}'",
                    entry_path.display(),
                    dest_path.display()
                )
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
