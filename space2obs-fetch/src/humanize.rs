//! Human-readable byte sizes.

const UNITS: [&str; 5] = ["KB", "MB", "GB", "TB", "PB"];

/// Formats a byte count using binary multiples, e.g. `12.3 KB`.
///
/// The largest unit whose multiple does not exceed `bytes` is used, with
/// one decimal. Sizes under 1 KB are shown in bytes.
pub fn humanize_bytes(bytes: u64) -> String {
    if bytes < 1 << 10 {
        return format!("{bytes} B");
    }

    let mut unit = UNITS[0];
    let mut factor = 10;
    for (i, name) in UNITS.iter().enumerate() {
        let shift = 10 * (i as u32 + 1);
        if bytes >= 1u64 << shift {
            unit = *name;
            factor = shift;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let value = bytes as f64 / (1u64 << factor) as f64;
    format!("{value:.1} {unit}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_bytes() {
        assert_eq!(humanize_bytes(0), "0 B");
        assert_eq!(humanize_bytes(1023), "1023 B");
        assert_eq!(humanize_bytes(1024), "1.0 KB");
        assert_eq!(humanize_bytes(1536), "1.5 KB");
        assert_eq!(humanize_bytes(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(humanize_bytes(3 << 30), "3.0 GB");
    }
}
