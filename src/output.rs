//! CLI output formatting.
//!
//! One line per photo as the batch progresses, a short aggregate summary at
//! the end, and skip notices on stderr. Format functions are pure (no I/O)
//! so tests can assert on exact strings; `print_*` wrappers do the writing.
//!
//! ```text
//! 001 dawn-mist.jpg 4000x3000  Canon EOS R5  8.1 MB -> 412.3 KB (-95%)
//! 002 tokyo.jpg 6000x4000
//!   ! broken.jpg: Failed to decode /photos/broken.jpg
//! Processed 2 photos, skipped 1
//! Source 14.9 MB -> derivatives 1.1 MB (-92%)
//! ```

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable byte count (B / KB / MB, one decimal above bytes).
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Percent saved going from `source` to `output` bytes, clamped at zero.
fn percent_saved(source: u64, output: u64) -> u64 {
    if source == 0 || output >= source {
        return 0;
    }
    ((source - output) * 100) / source
}

/// One progress line per processed photo.
///
/// Camera is appended when detected; byte-size savings when the caller
/// tracked them (the derivatives pipeline does, the single-size one
/// doesn't).
pub fn format_photo_line(
    index: usize,
    filename: &str,
    dims: (u32, u32),
    camera: &str,
    savings: Option<(u64, u64)>,
) -> String {
    let mut line = format!("{} {} {}x{}", format_index(index), filename, dims.0, dims.1);
    if !camera.is_empty() {
        line.push_str(&format!("  {}", camera));
    }
    if let Some((source, output)) = savings {
        line.push_str(&format!(
            "  {} -> {} (-{}%)",
            format_bytes(source),
            format_bytes(output),
            percent_saved(source, output)
        ));
    }
    line
}

/// Skip notice for a photo that failed inside the per-file boundary.
pub fn format_skip_line(filename: &str, message: &str) -> String {
    format!("  ! {}: {}", filename, message)
}

/// Aggregate totals for the finished batch.
pub fn format_summary(
    processed: usize,
    skipped: usize,
    source_bytes: u64,
    output_bytes: u64,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Processed {} photo{}, skipped {}",
        processed,
        if processed == 1 { "" } else { "s" },
        skipped
    )];
    if source_bytes > 0 {
        lines.push(format!(
            "Source {} -> derivatives {} (-{}%)",
            format_bytes(source_bytes),
            format_bytes(output_bytes),
            percent_saved(source_bytes, output_bytes)
        ));
    }
    lines
}

pub fn print_photo_line(
    index: usize,
    filename: &str,
    dims: (u32, u32),
    camera: &str,
    savings: Option<(u64, u64)>,
) {
    println!("{}", format_photo_line(index, filename, dims, camera, savings));
}

pub fn print_skip_line(filename: &str, message: &str) {
    eprintln!("{}", format_skip_line(filename, message));
}

pub fn print_summary(processed: usize, skipped: usize, source_bytes: u64, output_bytes: u64) {
    for line in format_summary(processed, skipped, source_bytes, output_bytes) {
        println!("{}", line);
    }
}
