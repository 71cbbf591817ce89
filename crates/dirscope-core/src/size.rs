//! Human-readable byte sizes.

/// Binary units, smallest first.
pub const SIZE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format a byte count with two decimals and a binary unit.
///
/// The value is divided by 1024 while it is at least 1024 and a larger
/// unit remains, so anything past the TiB range stays in TiB.
///
/// ```
/// use dirscope_core::format_size;
///
/// assert_eq!(format_size(0), "0.00 B");
/// assert_eq!(format_size(1536), "1.50 KiB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(512), "512.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
    }

    #[test]
    fn test_format_unit_boundaries() {
        assert_eq!(format_size(1024), "1.00 KiB");
        assert_eq!(format_size(1536), "1.50 KiB");
        assert_eq!(format_size(3584), "3.50 KiB");
        assert_eq!(format_size(1024 * 1024), "1.00 MiB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024), "5.00 GiB");
    }

    #[test]
    fn test_format_caps_at_tib() {
        let pib = 1024u64.pow(5);
        assert_eq!(format_size(pib), "1024.00 TiB");
    }
}
