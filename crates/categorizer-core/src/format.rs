//! Human-readable size strings

use crate::constants::SIZE_UNITS;

/// Round to two decimal places
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a byte count with binary prefixes ("0 Bytes", "1.5 KB", "1 MB").
///
/// The unit index is `floor(log1024(bytes))`, clamped to the largest unit,
/// and the scaled value is rounded to two decimals without trailing zeros.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    // Integer exponent search avoids float error at exact powers of 1024
    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = round_to_two_decimals(bytes as f64 / divisor as f64);
    format!("{} {}", value, SIZE_UNITS[unit])
}
