//! Upload policy
//!
//! One configurable policy replaces per-deployment copies of the limits:
//! the maximum size and both allowlists are values, never control flow.

use serde::Serialize;

use super::file::{
    normalize_extension, normalize_mime_type, validate_file_size, validate_file_type,
};
use crate::constants::{
    DEFAULT_ALLOWED_CONTENT_TYPES, DEFAULT_ALLOWED_EXTENSIONS, EXTENDED_MAX_FILE_SIZE_MB, MIB,
    STANDARD_MAX_FILE_SIZE_MB,
};
use crate::error::IntakeError;
use crate::format::format_file_size;
use crate::models::CandidateFile;

/// Type and size policy applied to every candidate file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadPolicy {
    max_file_size: u64,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl UploadPolicy {
    /// Build a policy; list entries are trimmed, lowercased and de-duplicated
    pub fn new<E, C>(max_file_size: u64, allowed_extensions: E, allowed_content_types: C) -> Self
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            max_file_size,
            allowed_extensions: normalize_list(allowed_extensions, normalize_extension),
            allowed_content_types: normalize_list(allowed_content_types, normalize_mime_type),
        }
    }

    /// Default data-file allowlists with the given size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self::new(
            max_file_size,
            DEFAULT_ALLOWED_EXTENSIONS,
            DEFAULT_ALLOWED_CONTENT_TYPES,
        )
    }

    /// 16 MiB limit
    pub fn standard() -> Self {
        Self::with_max_file_size(STANDARD_MAX_FILE_SIZE_MB * MIB)
    }

    /// 50 MiB limit
    pub fn extended() -> Self {
        Self::with_max_file_size(EXTENDED_MAX_FILE_SIZE_MB * MIB)
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn allowed_content_types(&self) -> &[String] {
        &self.allowed_content_types
    }

    /// Human-readable size limit, e.g. "16 MB"
    pub fn max_file_size_display(&self) -> String {
        format_file_size(self.max_file_size)
    }

    /// Check that the policy can accept anything at all
    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.max_file_size == 0 {
            return Err(IntakeError::InvalidConfig(
                "Maximum file size must be greater than zero".to_string(),
            ));
        }
        if self.allowed_extensions.is_empty() && self.allowed_content_types.is_empty() {
            return Err(IntakeError::InvalidConfig(
                "At least one allowed extension or content type is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a candidate file: size first, then type
    pub fn check(&self, file: &CandidateFile) -> Result<(), IntakeError> {
        validate_file_size(file.size, self.max_file_size)?;
        validate_file_type(
            file,
            &self.allowed_extensions,
            &self.allowed_content_types,
        )?;
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize_list<I, F>(items: I, normalize: F) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> String,
{
    let mut out: Vec<String> = Vec::new();
    for item in items {
        let value = normalize(item.as_ref());
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
