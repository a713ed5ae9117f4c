//! Upload policy defaults

/// One mebibyte in bytes
pub const MIB: u64 = 1024 * 1024;

/// Size limit of the standard upload profile (16 MiB)
pub const STANDARD_MAX_FILE_SIZE_MB: u64 = 16;

/// Size limit of the extended upload profile (50 MiB)
pub const EXTENDED_MAX_FILE_SIZE_MB: u64 = 50;

/// Data file extensions accepted by default (without leading dot)
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["csv", "xlsx", "json", "txt"];

/// Declared MIME types accepted by default
pub const DEFAULT_ALLOWED_CONTENT_TYPES: &[&str] = &[
    "text/csv",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/json",
    "text/plain",
];

/// Content type used when neither the client nor the extension tells us one
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Units used by size formatting, base 1024
pub const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Confidence slider default (percent)
pub const DEFAULT_CONFIDENCE_PERCENT: u8 = 50;

/// Prefix of generated result file names
pub const DOWNLOAD_NAME_PREFIX: &str = "categorized_data";
