//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Format bytes as human-readable size string
///
/// # Examples
///
/// ```
/// use bundle_stats_diff::fmt::format_bytes;
///
/// assert_eq!(format_bytes(512), "512 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1_048_576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a signed byte delta as human-readable size string
///
/// Negative magnitudes keep their sign; positive and zero values render
/// like [`format_bytes`].
///
/// # Examples
///
/// ```
/// use bundle_stats_diff::fmt::format_signed_bytes;
///
/// assert_eq!(format_signed_bytes(200), "200 B");
/// assert_eq!(format_signed_bytes(0), "0 B");
/// assert_eq!(format_signed_bytes(-1536), "-1.50 KB");
/// ```
pub fn format_signed_bytes(bytes: i64) -> String {
    if bytes < 0 {
        format!("-{}", format_bytes(bytes.unsigned_abs()))
    } else {
        format_bytes(bytes as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_various_sizes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(2_621_440), "2.50 MB");
    }

    #[test]
    fn test_format_signed_bytes_keeps_negative_sign() {
        assert_eq!(format_signed_bytes(-512), "-512 B");
        assert_eq!(format_signed_bytes(-1_048_576), "-1.00 MB");
    }

    #[test]
    fn test_format_signed_bytes_zero_and_positive() {
        assert_eq!(format_signed_bytes(0), "0 B");
        assert_eq!(format_signed_bytes(1536), "1.50 KB");
    }

    #[test]
    fn test_format_signed_bytes_handles_i64_min() {
        // unsigned_abs avoids overflow on the most negative value
        let formatted = format_signed_bytes(i64::MIN);
        assert!(formatted.starts_with('-'));
        assert!(formatted.ends_with("MB"));
    }
}
