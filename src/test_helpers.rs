//! Shared test utilities.
//!
//! Synthetic image fixtures encoded in-memory with the `image` crate — no
//! binary fixture files in the repo. The EXIF variant splices a hand-built
//! APP1 segment into the encoded JPEG so probe/extract paths can be
//! exercised end-to-end with a known raw payload.

use image::{ExtendedColorType, ImageEncoder, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// Encode a small gradient JPEG and return its bytes.
pub(crate) fn encode_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(Cursor::new(&mut buf))
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
    buf
}

/// Write a small valid JPEG with the given dimensions.
pub(crate) fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    std::fs::write(path, encode_jpeg(width, height)).unwrap();
}

/// Write a JPEG carrying `exif` as its raw APP1 Exif payload.
///
/// The segment is spliced directly after SOI:
/// `FF E1 <len> "Exif\0\0" <payload>`. Decoders hand the payload back
/// verbatim — it does not need to be well-formed TIFF.
pub(crate) fn create_test_jpeg_with_exif(path: &Path, width: u32, height: u32, exif: &[u8]) {
    let jpeg = encode_jpeg(width, height);
    let seg_len = (exif.len() + 8) as u16; // 2 length bytes + "Exif\0\0"

    let mut out = Vec::with_capacity(jpeg.len() + exif.len() + 10);
    out.extend_from_slice(&jpeg[..2]); // SOI
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&seg_len.to_be_bytes());
    out.extend_from_slice(b"Exif\0\0");
    out.extend_from_slice(exif);
    out.extend_from_slice(&jpeg[2..]);
    std::fs::write(path, out).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_jpeg_decodes_to_requested_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fixture.jpg");
        create_test_jpeg(&path, 120, 90);

        assert_eq!(image::image_dimensions(&path).unwrap(), (120, 90));
    }

    #[test]
    fn exif_jpeg_still_decodes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("fixture.jpg");
        create_test_jpeg_with_exif(&path, 64, 48, b"II*\0payload");

        assert_eq!(image::image_dimensions(&path).unwrap(), (64, 48));
    }
}
