//! # photo-prep
//!
//! A build-time photo pipeline for static sites. Point it at a folder of
//! source photographs and it produces (a) resized WebP derivatives for web
//! delivery and (b) a JSON collection file describing each photo — paths,
//! filename-derived alt text, capture date, camera, pixel dimensions, and
//! placeholder fields for manual curation.
//!
//! # Architecture: One Sequential Batch
//!
//! ```text
//! scan      photos/        →  sorted file list
//! process   each photo     →  probe → extract → resize ×2 → record
//! write     records        →  photos.json (+ thumbs/, display/)
//! ```
//!
//! Each photo runs inside its own failure boundary: a corrupt file is
//! reported and skipped, never aborting the batch. Processing is strictly
//! sequential — this is an authoring-time tool run by hand over at most a
//! few thousand files, and predictable output beats throughput.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists eligible photos: extension allow-list, sorted, non-recursive |
//! | [`imaging`] | Backend trait + production decode/resize/WebP-encode |
//! | [`metadata`] | Heuristic EXIF text scan: capture date + camera make/model |
//! | [`naming`] | Filename-derived alt text and derivative stems |
//! | [`types`] | `PhotoRecord` — the serialized collection entry |
//! | [`collection`] | Newest-first ordering + pretty-JSON writer |
//! | [`process`] | The batch loop: per-photo boundary, summary totals |
//! | [`config`] | Optional `config.toml`: sizes, qualities, web path root |
//! | [`output`] | Console formatting — progress lines, skip notices, summary |
//!
//! # Design Decisions
//!
//! ## WebP-Only Output
//!
//! Every derivative is lossy WebP. The format has had universal browser
//! support for years and cuts file sizes dramatically against JPEG at
//! equivalent quality. One modern format keeps the output directories and
//! the frontend's `<img>` markup simple.
//!
//! ## Heuristic EXIF, Not an IFD Parser
//!
//! The [`metadata`] module does not decode EXIF's TIFF/IFD tag table. It
//! projects the raw buffer to latin-1 text and pattern-matches the two
//! fields that are stored as plain ASCII: the `YYYY:MM:DD HH:MM:SS`
//! timestamp and a known manufacturer token followed by a NUL-terminated
//! model string. Unknown makes are missed and exposure values (binary
//! rationals) are never extracted — both are accepted, documented behavior.
//! The collection's `focalLength`/`aperture`/`shutter`/`iso` fields exist as
//! curation placeholders, like `caption` and `tags`.
//!
//! ## Full Overwrite, No Merge
//!
//! Every run regenerates the whole collection from the source directory's
//! current contents and replaces the JSON file. Manual edits to `caption`,
//! `tags`, or `alt` in the output do not survive a re-run — curate in a copy
//! the frontend consumes, or accept the loss.
//!
//! ## Statically Linked Imaging
//!
//! Decoding and resizing use the `image` crate, WebP encoding bundles
//! libwebp via the `webp` crate. No ImageMagick, no libvips, no system
//! packages — the binary works anywhere it lands.

pub mod collection;
pub mod config;
pub mod imaging;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
