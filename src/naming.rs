//! Filename-derived display text.
//!
//! The source filename is the only identity a photo has, and its stem doubles
//! as the alt text: `2021-06-15_dawn-mist.jpg` → `2021 06 15 dawn mist`.
//! Separator characters (`-`, `_`) become spaces; nothing else is touched —
//! no trimming, no case changes. Curation happens downstream in the JSON
//! collection, not here.

use std::path::Path;

/// Derive alt text from a source filename.
///
/// Strips the extension, then replaces every `-` and `_` with a space:
/// - `dawn-mist.jpg` → `"dawn mist"`
/// - `IMG_0042.jpeg` → `"IMG 0042"`
/// - `tokyo.webp` → `"tokyo"`
///
/// A dotted stem keeps its dots: `roll-3.scan.tiff` → `"roll 3.scan"`.
pub fn alt_text(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    stem.replace(['-', '_'], " ")
}

/// The filename stem, used to name derivative files (`<stem>.webp`).
pub fn derivative_stem(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alt_text_replaces_dashes() {
        assert_eq!(alt_text("dawn-mist.jpg"), "dawn mist");
    }

    #[test]
    fn alt_text_replaces_underscores() {
        assert_eq!(alt_text("IMG_0042.jpeg"), "IMG 0042");
    }

    #[test]
    fn alt_text_replaces_mixed_separators() {
        assert_eq!(alt_text("2021-06-15_dawn-mist.png"), "2021 06 15 dawn mist");
    }

    #[test]
    fn alt_text_plain_stem_unchanged() {
        assert_eq!(alt_text("tokyo.webp"), "tokyo");
    }

    #[test]
    fn alt_text_preserves_case_and_spacing() {
        assert_eq!(alt_text("My  Photo-.jpg"), "My  Photo ");
    }

    #[test]
    fn alt_text_dotted_stem_keeps_inner_dots() {
        assert_eq!(alt_text("roll-3.scan.tiff"), "roll 3.scan");
    }

    #[test]
    fn alt_text_no_extension() {
        assert_eq!(alt_text("bare_name"), "bare name");
    }

    #[test]
    fn derivative_stem_strips_extension_only() {
        assert_eq!(derivative_stem("dawn-mist.jpg"), "dawn-mist");
        assert_eq!(derivative_stem("roll-3.scan.tiff"), "roll-3.scan");
    }
}
