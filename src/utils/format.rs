//! Formatting utilities for file sizes, dates, and count labels.

/// Format a byte size for display.
///
/// Below 1 MiB the size is shown in kilobytes, at or above in megabytes,
/// both with two decimal places.
pub fn format_size(bytes: u64) -> String {
    const MIB: u64 = 1_048_576;
    if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}

/// Format an ISO-8601 timestamp for display, keeping the date part only.
pub fn format_date(timestamp: &str) -> String {
    timestamp
        .split(['T', ' '])
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

/// Label a count with a singular/plural noun ("1 file", "2 files").
pub fn count_label(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(0), "0.00 KB");
        assert_eq!(format_size(512), "0.50 KB");
        assert_eq!(format_size(1023), "1.00 KB");
        assert_eq!(format_size(204800), "200.00 KB");
    }

    #[test]
    fn test_format_size_unit_boundary() {
        // The unit switches exactly at 1 MiB.
        assert_eq!(format_size(1_048_575), "1024.00 KB");
        assert_eq!(format_size(1_048_576), "1.00 MB");
        assert_eq!(format_size(5_767_168), "5.50 MB");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-02T12:33:00"), "2024-05-02");
        assert_eq!(format_date("2024-05-02 12:33:00"), "2024-05-02");
        assert_eq!(format_date("2024-05-02"), "2024-05-02");
    }

    #[test]
    fn test_count_label_pluralization_boundary() {
        assert_eq!(count_label(0, "file"), "0 files");
        assert_eq!(count_label(1, "file"), "1 file");
        assert_eq!(count_label(2, "file"), "2 files");
    }
}
