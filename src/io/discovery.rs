//! Image file discovery by extension

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{Result, WithPath};
use std::path::{Path, PathBuf};

/// Test whether a path carries a recognised image extension
///
/// Only the name is inspected; the file is never opened.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List image files directly inside `dir`, sorted by path
///
/// Subdirectories are not searched.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "read directory")? {
        let path = entry.with_path(dir, "read directory entry")?.path();
        if path.is_file() && is_image_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
