// Mon Oct 19 2026 - Alex

pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

pub fn format_offset(offset: usize) -> String {
    format!("0x{:08x}", offset)
}

/// Wall clock time of day as `HH:MM:SS` (UTC).
pub fn clock_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    format_clock(secs)
}

pub fn format_clock(epoch_secs: u64) -> String {
    let day_secs = epoch_secs % 86_400;
    format!("{:02}:{:02}:{:02}", day_secs / 3600, (day_secs % 3600) / 60, day_secs % 60)
}

pub fn separator() -> String {
    "─".repeat(40)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(86_399), "23:59:59");
        assert_eq!(format_clock(86_400 * 3 + 3600 * 9 + 60 * 5 + 7), "09:05:07");
        assert_eq!(clock_timestamp().len(), 8);
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0x1f), "0x0000001f");
    }
}
