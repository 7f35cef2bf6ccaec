//! Collection ordering and serialization.
//!
//! The collection is the JSON array the web frontend consumes. Ordering is
//! newest-first by capture date, with undated photos after all dated ones.
//! The previous file is replaced in full on every run — there is no merge
//! with manual edits.

use crate::types::PhotoRecord;
use std::cmp::Ordering;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Sort records for output.
///
/// - Both dated: reverse-lexicographic date compare (newest first; valid
///   because dates are zero-padded ISO strings).
/// - One dated: the dated record sorts first.
/// - Neither dated: ascending by `src`. Derivative records carry no `src`,
///   so every undated pair compares equal and the stable sort keeps scan
///   order.
pub fn sort_records(records: &mut [PhotoRecord]) {
    records.sort_by(compare_records);
}

fn compare_records(a: &PhotoRecord, b: &PhotoRecord) -> Ordering {
    match (a.date.is_empty(), b.date.is_empty()) {
        (false, false) => b.date.cmp(&a.date),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.src.cmp(&b.src),
    }
}

/// Serialize the full collection as pretty-printed JSON, creating the
/// output directory as needed and overwriting any existing file.
pub fn write_collection(records: &[PhotoRecord], path: &Path) -> Result<(), CollectionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::ExifScan;
    use tempfile::TempDir;

    fn single(src: &str, date: &str) -> PhotoRecord {
        let scan = ExifScan {
            date: (!date.is_empty()).then(|| date.to_string()),
            camera: None,
        };
        PhotoRecord::single("x.jpg", src.to_string(), (1, 1), &scan)
    }

    fn derivative(stem: &str, date: &str) -> PhotoRecord {
        let scan = ExifScan {
            date: (!date.is_empty()).then(|| date.to_string()),
            camera: None,
        };
        PhotoRecord::derivative(
            &format!("{stem}.jpg"),
            format!("/images/thumbs/{stem}.webp"),
            format!("/images/display/{stem}.webp"),
            (1, 1),
            &scan,
        )
    }

    fn srcs(records: &[PhotoRecord]) -> Vec<&str> {
        records.iter().map(|r| r.src.as_deref().unwrap()).collect()
    }

    #[test]
    fn dated_records_newest_first() {
        let mut records = vec![
            single("/a.webp", "2019-01-01"),
            single("/b.webp", "2023-07-30"),
            single("/c.webp", "2021-06-15"),
        ];
        sort_records(&mut records);
        assert_eq!(srcs(&records), vec!["/b.webp", "/c.webp", "/a.webp"]);
    }

    #[test]
    fn dated_sorts_before_undated() {
        let mut records = vec![
            single("/undated.webp", ""),
            single("/dated.webp", "2020-05-01"),
        ];
        sort_records(&mut records);
        assert_eq!(srcs(&records), vec!["/dated.webp", "/undated.webp"]);
    }

    #[test]
    fn undated_sorted_ascending_by_src() {
        let mut records = vec![
            single("/z.webp", ""),
            single("/a.webp", "2020-01-01"),
            single("/m.webp", ""),
            single("/b.webp", ""),
        ];
        sort_records(&mut records);
        assert_eq!(
            srcs(&records),
            vec!["/a.webp", "/b.webp", "/m.webp", "/z.webp"]
        );
    }

    #[test]
    fn undated_derivative_records_keep_insertion_order() {
        // No `src` to compare, so the stable sort leaves them as scanned
        let mut records = vec![
            derivative("zebra", ""),
            derivative("apple", "2022-02-02"),
            derivative("mango", ""),
        ];
        sort_records(&mut records);

        let thumbs: Vec<&str> = records.iter().map(|r| r.thumb.as_deref().unwrap()).collect();
        assert_eq!(
            thumbs,
            vec![
                "/images/thumbs/apple.webp",
                "/images/thumbs/zebra.webp",
                "/images/thumbs/mango.webp",
            ]
        );
    }

    #[test]
    fn date_compare_is_lexicographic_on_iso_strings() {
        let mut records = vec![
            single("/a.webp", "2021-12-03"),
            single("/b.webp", "2021-03-21"),
        ];
        sort_records(&mut records);
        assert_eq!(srcs(&records), vec!["/a.webp", "/b.webp"]);
    }

    #[test]
    fn empty_collection_writes_bare_brackets() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photos.json");

        write_collection(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn writer_creates_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site/data/photos.json");

        write_collection(&[single("/a.webp", "")], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn writer_overwrites_existing_file_in_full() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photos.json");
        fs::write(&path, "something much longer than an empty array").unwrap();

        write_collection(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn output_is_two_space_indented() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photos.json");

        write_collection(&[single("/a.webp", "")], &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n  {\n    \"src\""));
    }

    #[test]
    fn rerun_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("photos.json");
        let records = vec![single("/a.webp", "2021-06-15"), single("/b.webp", "")];

        write_collection(&records, &path).unwrap();
        let first = fs::read(&path).unwrap();
        write_collection(&records, &path).unwrap();
        assert_eq!(first, fs::read(&path).unwrap());
    }
}
