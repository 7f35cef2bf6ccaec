//! Production image processing backend.
//!
//! Everything is statically linked into the binary — no ImageMagick, no
//! libvips, no system packages. Decoding is pure Rust via the `image`
//! crate; WebP encoding bundles libwebp through the `webp` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | Dimensions + raw EXIF | `ImageReader::into_decoder` + `ImageDecoder::exif_metadata` |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → WebP (lossy) | `webp::Encoder` at a quality factor |
//!
//! The raw EXIF buffer comes straight out of the container segment (JPEG
//! APP1, WebP EXIF chunk); formats whose decoder does not surface one yield
//! `None` and the record's date/camera stay empty.

use super::backend::{BackendError, ImageBackend, ImageProbe};
use super::params::ResizeParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::path::Path;

/// Production backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Save a DynamicImage to the given path, inferring format from extension.
fn save_image(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "webp" => save_webp(img, path, quality),
        other => Err(BackendError::ProcessingFailed(format!(
            "Unsupported output format: {}",
            other
        ))),
    }
}

/// Encode and save as lossy WebP.
///
/// `webp::Encoder` only accepts RGB8/RGBA8 buffers, so other pixel formats
/// are converted first.
fn save_webp(img: &DynamicImage, path: &Path, quality: u32) -> Result<(), BackendError> {
    let converted;
    let source = match img {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_) => img,
        _ => {
            converted = DynamicImage::ImageRgba8(img.to_rgba8());
            &converted
        }
    };
    let encoder = webp::Encoder::from_image(source)
        .map_err(|e| BackendError::ProcessingFailed(format!("WebP encode failed: {e}")))?;
    let encoded = encoder.encode(quality as f32);
    std::fs::write(path, &*encoded).map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn probe(&self, path: &Path) -> Result<ImageProbe, BackendError> {
        let reader = ImageReader::open(path).map_err(BackendError::Io)?;
        let mut decoder = reader.into_decoder().map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let (width, height) = decoder.dimensions();
        // Best-effort: a format without EXIF support just reports none
        let exif = decoder.exif_metadata().unwrap_or(None);
        Ok(ImageProbe {
            width,
            height,
            exif,
        })
    }

    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
        let img = load_image(&params.source)?;
        // Dimensions were already aspect-computed upstream; resize to them
        // exactly rather than letting the fit re-round them.
        let resized = img.resize_exact(params.width, params.height, FilterType::Lanczos3);
        save_image(&resized, &params.output, params.quality.value())
    }
}
