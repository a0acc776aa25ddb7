// Human-readable byte sizes

const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const STEP: f64 = 1024.0;

/// Index into the unit ladder for `bytes`. Zero maps to `Bytes`.
pub fn unit_index(bytes: u64) -> usize {
    if bytes == 0 {
        return 0;
    }
    let mut index = 0;
    let mut value = bytes;
    while value >= 1024 && index < UNITS.len() - 1 {
        value /= 1024;
        index += 1;
    }
    index
}

/// Format a byte count on a base-1024 ladder, e.g. `1.5 KB`.
///
/// The value is rounded to `decimals` places and trailing zeros are dropped.
/// Zero is always rendered as `0 Bytes`.
pub fn format_bytes(bytes: u64, decimals: i32) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let index = unit_index(bytes);
    let places = decimals.max(0) as usize;
    let value = bytes as f64 / STEP.powi(index as i32);
    let rounded = format!("{:.*}", places, value);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    format!("{} {}", trimmed, UNITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
        assert_eq!(format_bytes(0, 0), "0 Bytes");
    }

    #[test]
    fn test_small_values() {
        assert_eq!(format_bytes(1, 2), "1 Bytes");
        assert_eq!(format_bytes(1023, 2), "1023 Bytes");
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_bytes(1_234_567, 2), "1.18 MB");
        assert_eq!(format_bytes(1_234_567, 0), "1 MB");
        assert_eq!(format_bytes(1_234_567, -3), "1 MB");
    }

    #[test]
    fn test_large_units() {
        assert_eq!(format_bytes(1024u64.pow(3), 2), "1 GB");
        assert_eq!(format_bytes(1024u64.pow(6), 2), "1 EB");
        assert!(format_bytes(u64::MAX, 2).ends_with(" EB"));
    }

    #[test]
    fn test_unit_monotonic_over_powers() {
        let mut last = 0;
        for power in 0..7u32 {
            let index = unit_index(1024u64.pow(power));
            assert!(index >= last);
            assert_eq!(index, power as usize);
            last = index;
        }
    }
}
