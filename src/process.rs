//! The batch pipeline.
//!
//! Runs the whole job for one invocation: scan the source directory, then
//! for each photo — probe, extract metadata, produce derivatives, build the
//! record — and finally sort and write the collection JSON.
//!
//! ## Two pipelines
//!
//! - [`derivatives`]: two WebP files per photo (`thumbs/` and `display/`
//!   subdirectories under the output root), records with `thumb`/`display`
//!   references.
//! - [`single`]: one WebP per photo directly under the output root, records
//!   with a `src` reference.
//!
//! ## Failure boundary
//!
//! Files are processed strictly one after another. Each photo runs inside
//! its own failure boundary: a decode, resize, or I/O error is reported on
//! stderr with the filename and the photo is left out of the collection —
//! the batch continues and still exits 0. Only errors outside the boundary
//! (scan, collection write, output-directory creation) abort the run.
//!
//! There is no cache and no merge: every run reprocesses every source file
//! and replaces the collection in full.

use crate::collection::{self, CollectionError};
use crate::config::PrepConfig;
use crate::imaging::{
    BackendError, ImageBackend, ImageProbe, Quality, create_derivative, probe_image,
};
use crate::metadata::{self, ExifScan};
use crate::naming;
use crate::output;
use crate::scan::{self, ScanError};
use crate::types::PhotoRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Imaging error: {0}")]
    Imaging(#[from] BackendError),
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),
}

/// Subdirectory names under the output root (derivatives pipeline).
pub const THUMBS_SUBDIR: &str = "thumbs";
pub const DISPLAY_SUBDIR: &str = "display";

/// Aggregate result of one batch run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
    pub source_bytes: u64,
    pub output_bytes: u64,
}

/// Run the derivatives pipeline: thumbnail + display WebP per photo.
pub fn derivatives(
    backend: &impl ImageBackend,
    source: &Path,
    output_root: &Path,
    collection_path: &Path,
    config: &PrepConfig,
) -> Result<Summary, ProcessError> {
    let photos = scan::scan_source(source)?;

    let thumbs_dir = output_root.join(THUMBS_SUBDIR);
    let display_dir = output_root.join(DISPLAY_SUBDIR);
    if !photos.is_empty() {
        fs::create_dir_all(&thumbs_dir)?;
        fs::create_dir_all(&display_dir)?;
    }

    let web = config.web_root.trim_end_matches('/').to_string();
    process_batch(backend, &photos, collection_path, true, |photo, filename, probe, scan| {
        let stem = naming::derivative_stem(filename);
        let dims = (probe.width, probe.height);

        let thumb = create_derivative(
            backend,
            photo,
            &thumbs_dir,
            &stem,
            dims,
            config.thumbnail.width,
            Quality::new(config.thumbnail.quality),
        )?;
        let display = create_derivative(
            backend,
            photo,
            &display_dir,
            &stem,
            dims,
            config.display.width,
            Quality::new(config.display.quality),
        )?;

        let record = PhotoRecord::derivative(
            filename,
            format!("{web}/{THUMBS_SUBDIR}/{stem}.webp"),
            format!("{web}/{DISPLAY_SUBDIR}/{stem}.webp"),
            dims,
            scan,
        );
        Ok((record, thumb.bytes + display.bytes))
    })
}

/// Run the single-size pipeline: one WebP per photo at the display size.
pub fn single(
    backend: &impl ImageBackend,
    source: &Path,
    output_root: &Path,
    collection_path: &Path,
    config: &PrepConfig,
) -> Result<Summary, ProcessError> {
    let photos = scan::scan_source(source)?;

    if !photos.is_empty() {
        fs::create_dir_all(output_root)?;
    }

    let web = config.web_root.trim_end_matches('/').to_string();
    process_batch(backend, &photos, collection_path, false, |photo, filename, probe, scan| {
        let stem = naming::derivative_stem(filename);
        let dims = (probe.width, probe.height);

        let out = create_derivative(
            backend,
            photo,
            output_root,
            &stem,
            dims,
            config.display.width,
            Quality::new(config.display.quality),
        )?;

        let record = PhotoRecord::single(filename, format!("{web}/{stem}.webp"), dims, scan);
        Ok((record, out.bytes))
    })
}

/// Per-photo result handed back through the failure boundary.
struct Outcome {
    record: PhotoRecord,
    dims: (u32, u32),
    source_bytes: u64,
    output_bytes: u64,
}

/// The shared sequential loop: probe + extract + produce per photo, then
/// sort and write the collection.
fn process_batch<B, F>(
    backend: &B,
    photos: &[PathBuf],
    collection_path: &Path,
    show_savings: bool,
    mut produce: F,
) -> Result<Summary, ProcessError>
where
    B: ImageBackend,
    F: FnMut(&Path, &str, &ImageProbe, &ExifScan) -> Result<(PhotoRecord, u64), ProcessError>,
{
    let mut records: Vec<PhotoRecord> = Vec::new();
    let mut summary = Summary::default();

    for (i, photo) in photos.iter().enumerate() {
        let filename = photo
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match process_one(backend, photo, &filename, &mut produce) {
            Ok(outcome) => {
                let savings = show_savings.then_some((outcome.source_bytes, outcome.output_bytes));
                output::print_photo_line(i + 1, &filename, outcome.dims, &outcome.record.camera, savings);
                summary.processed += 1;
                summary.source_bytes += outcome.source_bytes;
                summary.output_bytes += outcome.output_bytes;
                records.push(outcome.record);
            }
            Err(e) => {
                output::print_skip_line(&filename, &e.to_string());
                summary.skipped += 1;
            }
        }
    }

    collection::sort_records(&mut records);
    collection::write_collection(&records, collection_path)?;
    Ok(summary)
}

fn process_one<B, F>(
    backend: &B,
    photo: &Path,
    filename: &str,
    produce: &mut F,
) -> Result<Outcome, ProcessError>
where
    B: ImageBackend,
    F: FnMut(&Path, &str, &ImageProbe, &ExifScan) -> Result<(PhotoRecord, u64), ProcessError>,
{
    let probe = probe_image(backend, photo)?;
    let scan = probe
        .exif
        .as_deref()
        .map(metadata::scan_exif)
        .unwrap_or_default();
    let source_bytes = fs::metadata(photo)?.len();
    let (record, output_bytes) = produce(photo, filename, &probe, &scan)?;

    Ok(Outcome {
        dims: (probe.width, probe.height),
        record,
        source_bytes,
        output_bytes,
    })
}
