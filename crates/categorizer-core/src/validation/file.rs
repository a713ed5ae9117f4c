//! Candidate file checks
//!
//! - Size: byte count against the configured maximum
//! - Type: extension or declared MIME type against the allowlists

use crate::error::IntakeError;
use crate::models::CandidateFile;

/// Validate file size
pub fn validate_file_size(file_size: u64, max_size: u64) -> Result<(), IntakeError> {
    if file_size > max_size {
        return Err(IntakeError::OversizedFile {
            size: file_size,
            max: max_size,
        });
    }
    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "text/csv; charset=utf-8" -> "text/csv").
pub fn normalize_mime_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
        .to_lowercase()
}

/// Normalize an allowlist extension entry ("  .CSV" -> "csv")
pub fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_lowercase()
}

/// Validate file type.
///
/// Either signal is sufficient: an allowed extension with an unknown
/// declared type passes, and so does an allowed declared type on a file
/// with an unexpected extension.
pub fn validate_file_type(
    file: &CandidateFile,
    allowed_extensions: &[String],
    allowed_content_types: &[String],
) -> Result<(), IntakeError> {
    let extension_allowed = file
        .extension()
        .is_some_and(|ext| allowed_extensions.contains(&ext));

    let normalized = normalize_mime_type(&file.content_type);
    let content_type_allowed =
        !normalized.is_empty() && allowed_content_types.contains(&normalized);

    if !extension_allowed && !content_type_allowed {
        return Err(IntakeError::UnsupportedType {
            file_name: file.name.clone(),
            content_type: file.content_type.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> (Vec<String>, Vec<String>) {
        (
            vec!["csv".to_string(), "txt".to_string()],
            vec!["text/csv".to_string(), "text/plain".to_string()],
        )
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(validate_file_size(100, 100).is_ok());
        assert_eq!(
            validate_file_size(101, 100),
            Err(IntakeError::OversizedFile { size: 101, max: 100 })
        );
    }

    #[test]
    fn mime_parameters_are_stripped() {
        assert_eq!(normalize_mime_type("Text/CSV; charset=utf-8"), "text/csv");
        assert_eq!(normalize_mime_type(""), "");
    }

    #[test]
    fn extension_entries_are_normalized() {
        assert_eq!(normalize_extension(" .XLSX "), "xlsx");
    }

    #[test]
    fn extension_alone_is_enough() {
        let (exts, types) = allowed();
        let file = CandidateFile::new("DATA.CSV", 1, "");
        assert!(validate_file_type(&file, &exts, &types).is_ok());
    }

    #[test]
    fn content_type_alone_is_enough() {
        let (exts, types) = allowed();
        let file = CandidateFile::new("export", 1, "text/plain; charset=utf-8");
        assert!(validate_file_type(&file, &exts, &types).is_ok());
    }

    #[test]
    fn neither_signal_rejects() {
        let (exts, types) = allowed();
        let file = CandidateFile::new("archive.zip", 1000, "application/zip");
        assert!(matches!(
            validate_file_type(&file, &exts, &types),
            Err(IntakeError::UnsupportedType { .. })
        ));
    }
}
