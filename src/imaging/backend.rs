//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the pipeline's only view of codec work:
//! `probe` reports what a source file contains, `resize` produces one
//! re-encoded derivative. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend); tests use the
//! recording [`MockBackend`](tests::MockBackend).

use super::params::ResizeParams;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of probing a source image: decoded dimensions plus the raw EXIF
/// payload when the container carries one.
///
/// The buffer is handed to the metadata scan untouched — no tag-table
/// decoding happens on this side of the trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageProbe {
    pub width: u32,
    pub height: u32,
    pub exif: Option<Vec<u8>>,
}

/// Trait for image processing backends.
pub trait ImageBackend: Sync {
    /// Read dimensions and the raw EXIF buffer without decoding pixels.
    fn probe(&self, path: &Path) -> Result<ImageProbe, BackendError>;

    /// Decode, resize to the exact dimensions in `params`, and encode as
    /// lossy WebP at `params.quality`.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;
}
