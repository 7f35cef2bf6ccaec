//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how*: the
//! [`operations`](super::operations) module decides which derivatives to
//! produce, the [`backend`](super::backend) does the pixel work. Keeping the
//! description separate lets tests swap in a recording mock backend.

use std::path::PathBuf;

/// Quality setting for lossy WebP encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(85)
    }
}

/// Full specification for one resize-and-encode operation.
///
/// `width`/`height` are the exact output dimensions, already computed by
/// [`calculations`](super::calculations) — the backend does no dimension
/// math of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub quality: Quality,
}
