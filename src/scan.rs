//! Source-directory scanning.
//!
//! Lists the photos one batch run will process: top-level regular files in
//! the source directory whose extension is on the allow-list, sorted
//! lexicographically by filename. Subdirectories, sidecar files, and anything
//! with an unknown extension are ignored — the scan never recurses.
//!
//! A missing source directory is a first-run bootstrap, not an error: the
//! directory is created and the scan returns an empty list, so the pipeline
//! still writes a valid (empty) collection.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extensions eligible for processing, matched case-insensitively.
///
/// Deliberately narrow: `.tif` is not on the list, only `.tiff`.
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tiff"];

/// List eligible photos in `source`, sorted by filename.
///
/// Creates `source` (recursively) when it does not exist and returns an
/// empty list — the bootstrap case.
pub fn scan_source(source: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !source.exists() {
        fs::create_dir_all(source)?;
        return Ok(Vec::new());
    }

    let mut photos: Vec<PathBuf> = fs::read_dir(source)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_photo(p))
        .collect();

    photos.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()).unwrap_or_default());
    Ok(photos)
}

fn is_photo(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    PHOTO_EXTENSIONS.contains(&ext.as_str())
}
