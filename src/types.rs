//! Serialized collection types.
//!
//! One [`PhotoRecord`] per source photo, written as a JSON array by the
//! [`collection`](crate::collection) module. Field order in the structs is
//! field order in the JSON.
//!
//! Two record shapes share the struct: the single-size pipeline fills `src`,
//! the derivatives pipeline fills `thumb` + `display`. Absent references are
//! skipped during serialization, so each variant's JSON carries only its own
//! keys.
//!
//! `caption` and `tags` are always empty — they exist as placeholders for
//! manual curation in the written JSON. Re-running the pipeline regenerates
//! the whole collection and overwrites any such edits.

use crate::metadata::ExifScan;
use crate::naming;
use serde::{Deserialize, Serialize};

/// One photo in the output collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoRecord {
    /// Web path of the single derivative (single-size pipeline only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Web path of the thumbnail derivative (derivatives pipeline only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<String>,
    /// Web path of the display derivative (derivatives pipeline only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    /// Alt text derived from the filename (separators become spaces).
    pub alt: String,
    /// Always empty; curated by hand downstream.
    pub caption: String,
    /// Capture date as `YYYY-MM-DD`, or empty when undetected.
    pub date: String,
    /// `"Make Model"` free text, or empty when undetected.
    pub camera: String,
    /// Always empty; curated by hand downstream.
    pub tags: Vec<String>,
    pub exif: ExifInfo,
}

/// Embedded-metadata block of a record.
///
/// The exposure fields stay empty: EXIF stores them as binary rationals,
/// which the text scan in [`metadata`](crate::metadata) cannot see. They are
/// placeholders with the same curation contract as `caption`/`tags`.
/// `width`/`height` always describe the decoded *source* image, never a
/// derivative, and are omitted when the decoder reported nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExifInfo {
    pub focal_length: String,
    pub aperture: String,
    pub iso: Option<u32>,
    pub shutter: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub height: Option<u32>,
}

impl PhotoRecord {
    /// Assemble a single-size record (`src` reference).
    pub fn single(filename: &str, src: String, dims: (u32, u32), scan: &ExifScan) -> Self {
        Self {
            src: Some(src),
            thumb: None,
            display: None,
            ..Self::base(filename, dims, scan)
        }
    }

    /// Assemble a derivatives record (`thumb` + `display` references).
    pub fn derivative(
        filename: &str,
        thumb: String,
        display: String,
        dims: (u32, u32),
        scan: &ExifScan,
    ) -> Self {
        Self {
            src: None,
            thumb: Some(thumb),
            display: Some(display),
            ..Self::base(filename, dims, scan)
        }
    }

    fn base(filename: &str, dims: (u32, u32), scan: &ExifScan) -> Self {
        Self {
            src: None,
            thumb: None,
            display: None,
            alt: naming::alt_text(filename),
            caption: String::new(),
            date: scan.date.clone().unwrap_or_default(),
            camera: scan.camera.clone().unwrap_or_default(),
            tags: Vec::new(),
            exif: ExifInfo {
                width: Some(dims.0),
                height: Some(dims.1),
                ..ExifInfo::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(date: Option<&str>, camera: Option<&str>) -> ExifScan {
        ExifScan {
            date: date.map(String::from),
            camera: camera.map(String::from),
        }
    }

    #[test]
    fn single_record_fields() {
        let rec = PhotoRecord::single(
            "dawn-mist.jpg",
            "/images/dawn-mist.webp".into(),
            (4000, 3000),
            &scan(Some("2021-06-15"), Some("Canon EOS R5")),
        );

        assert_eq!(rec.src.as_deref(), Some("/images/dawn-mist.webp"));
        assert_eq!(rec.thumb, None);
        assert_eq!(rec.alt, "dawn mist");
        assert_eq!(rec.caption, "");
        assert_eq!(rec.date, "2021-06-15");
        assert_eq!(rec.camera, "Canon EOS R5");
        assert!(rec.tags.is_empty());
        assert_eq!(rec.exif.width, Some(4000));
        assert_eq!(rec.exif.height, Some(3000));
    }

    #[test]
    fn derivative_record_fields() {
        let rec = PhotoRecord::derivative(
            "IMG_0042.jpeg",
            "/images/thumbs/IMG_0042.webp".into(),
            "/images/display/IMG_0042.webp".into(),
            (1200, 800),
            &scan(None, None),
        );

        assert_eq!(rec.src, None);
        assert_eq!(rec.thumb.as_deref(), Some("/images/thumbs/IMG_0042.webp"));
        assert_eq!(rec.display.as_deref(), Some("/images/display/IMG_0042.webp"));
        assert_eq!(rec.alt, "IMG 0042");
        assert_eq!(rec.date, "");
        assert_eq!(rec.camera, "");
    }

    #[test]
    fn single_json_shape_and_key_order() {
        let rec = PhotoRecord::single(
            "a.jpg",
            "/images/a.webp".into(),
            (100, 50),
            &scan(None, None),
        );
        let json = serde_json::to_string(&rec).unwrap();

        // src variant carries no thumb/display keys
        assert!(json.starts_with(r#"{"src":"/images/a.webp","alt":"a""#));
        assert!(!json.contains("thumb"));
        assert!(!json.contains("display"));
    }

    #[test]
    fn derivative_json_has_no_src_key() {
        let rec = PhotoRecord::derivative(
            "a.jpg",
            "/images/thumbs/a.webp".into(),
            "/images/display/a.webp".into(),
            (100, 50),
            &scan(None, None),
        );
        let json = serde_json::to_string(&rec).unwrap();

        assert!(json.starts_with(r#"{"thumb":"#));
        assert!(!json.contains(r#""src""#));
    }

    #[test]
    fn exif_block_serializes_camel_case_with_null_iso() {
        let rec = PhotoRecord::single("a.jpg", "/a.webp".into(), (10, 20), &scan(None, None));
        let json = serde_json::to_value(&rec).unwrap();
        let exif = &json["exif"];

        assert_eq!(exif["focalLength"], "");
        assert_eq!(exif["aperture"], "");
        assert_eq!(exif["iso"], serde_json::Value::Null);
        assert_eq!(exif["shutter"], "");
        assert_eq!(exif["width"], 10);
        assert_eq!(exif["height"], 20);
    }

    #[test]
    fn exif_width_height_omitted_when_unknown() {
        let exif = ExifInfo::default();
        let json = serde_json::to_string(&exif).unwrap();
        assert!(!json.contains("width"));
        assert!(!json.contains("height"));
        assert!(json.contains(r#""iso":null"#));
    }
}
