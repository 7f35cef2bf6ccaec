//! Heuristic EXIF extraction.
//!
//! The probe hands us the raw EXIF payload as bytes. Instead of decoding the
//! TIFF/IFD tag table, this module projects the buffer to latin-1 text and
//! pattern-matches the two fields that are stored as plain ASCII inside it:
//!
//! - **Capture date**: EXIF writes `DateTimeOriginal` as
//!   `"YYYY:MM:DD HH:MM:SS"`. The first substring in that shape wins and its
//!   date part is rewritten to `YYYY-MM-DD`.
//! - **Camera**: a known manufacturer token immediately followed by a
//!   NUL-terminated model string (`"Canon\0EOS R5\0"`). The token list is
//!   checked in a fixed priority order; the first token that matches anywhere
//!   in the buffer wins, regardless of buffer position.
//!
//! The trade-offs are accepted contract, not bugs to fix: unknown makes are
//! missed, and a model string containing another vendor's name can mismatch.
//! Exposure values (focal length, aperture, shutter, ISO) are binary
//! rationals in EXIF and invisible to a text scan, so they are never
//! extracted here. The scan is total — malformed buffers yield empty fields,
//! never an error.

use regex::Regex;
use std::sync::LazyLock;

/// Fields recovered from the raw EXIF buffer. Both optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifScan {
    /// `YYYY-MM-DD`.
    pub date: Option<String>,
    /// `"Make Model"`, model trimmed.
    pub camera: Option<String>,
}

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}):(\d{2}):(\d{2}) \d{2}:\d{2}:\d{2}").expect("static date pattern")
});

/// Manufacturer tokens in priority order. First match wins.
///
/// All entries match case-sensitively except `samsung` and `LEICA`, whose
/// Make strings vary in casing across firmware versions.
const MAKERS: &[(&str, bool)] = &[
    ("Canon", false),
    ("NIKON", false),
    ("SONY", false),
    ("FUJIFILM", false),
    ("OLYMPUS", false),
    ("Panasonic", false),
    ("RICOH", false),
    ("PENTAX", false),
    ("Apple", false),
    ("GoPro", false),
    ("DJI", false),
    ("samsung", true),
    ("LEICA", true),
];

static MAKER_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MAKERS
        .iter()
        .map(|(token, case_insensitive)| {
            let flag = if *case_insensitive { "(?i)" } else { "" };
            // token, NUL, then the NUL-terminated model string
            let pattern = format!(r"{flag}({})\x00([^\x00]*)\x00", regex::escape(token));
            Regex::new(&pattern).expect("static maker pattern")
        })
        .collect()
});

/// Scan a raw EXIF buffer for a capture date and camera make/model.
pub fn scan_exif(buffer: &[u8]) -> ExifScan {
    let text = latin1(buffer);
    ExifScan {
        date: find_date(&text),
        camera: find_camera(&text),
    }
}

/// Project bytes to text one byte per character, so NULs and high bytes
/// survive as matchable characters.
fn latin1(buffer: &[u8]) -> String {
    buffer.iter().map(|&b| b as char).collect()
}

fn find_date(text: &str) -> Option<String> {
    DATE_RE
        .captures(text)
        .map(|caps| format!("{}-{}-{}", &caps[1], &caps[2], &caps[3]))
}

fn find_camera(text: &str) -> Option<String> {
    for re in MAKER_RES.iter() {
        if let Some(caps) = re.captures(text) {
            let maker = &caps[1];
            let model = caps[2].trim();
            return Some(if model.is_empty() {
                maker.to_string()
            } else {
                format!("{maker} {model}")
            });
        }
    }
    None
}
