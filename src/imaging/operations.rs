//! High-level image operations.
//!
//! Combines the pure dimension math with backend execution: decides output
//! names and dimensions, calls the backend, reports what landed on disk.

use super::backend::{BackendError, ImageBackend, ImageProbe};
use super::calculations::scale_to_width;
use super::params::{Quality, ResizeParams};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Probe a source image for dimensions and raw EXIF.
pub fn probe_image(backend: &impl ImageBackend, path: &Path) -> Result<ImageProbe> {
    backend.probe(path)
}

/// One derivative written to disk.
#[derive(Debug, Clone)]
pub struct DerivativeOutput {
    pub path: PathBuf,
    /// Encoded size; 0 when the output cannot be stat'd.
    pub bytes: u64,
}

/// Produce one WebP derivative of `source` in `output_dir`.
///
/// The output is named `<stem>.webp` and sized by [`scale_to_width`] — a
/// source narrower than `target_width` is re-encoded at its own width, never
/// upscaled. Each derivative is produced from the original, not chained off
/// another derivative.
pub fn create_derivative(
    backend: &impl ImageBackend,
    source: &Path,
    output_dir: &Path,
    stem: &str,
    original_dims: (u32, u32),
    target_width: u32,
    quality: Quality,
) -> Result<DerivativeOutput> {
    let (width, height) = scale_to_width(original_dims, target_width);
    let output = output_dir.join(format!("{stem}.webp"));

    backend.resize(&ResizeParams {
        source: source.to_path_buf(),
        output: output.clone(),
        width,
        height,
        quality,
    })?;

    let bytes = std::fs::metadata(&output).map(|m| m.len()).unwrap_or(0);
    Ok(DerivativeOutput { path: output, bytes })
}
