use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::IntakeError;

/// A file offered by the user, prior to validation.
///
/// Descriptors are never mutated; a new selection replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CandidateFile {
    /// Original filename as reported by the file chooser or drop event
    #[validate(length(
        min = 1,
        max = 255,
        message = "Filename must be between 1 and 255 characters"
    ))]
    pub name: String,
    /// File size in bytes
    pub size: u64,
    /// Declared content type (MIME type); empty when the client did not report one
    #[serde(default)]
    pub content_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: content_type.into(),
        }
    }

    /// Construct a descriptor and check its shape (non-empty, bounded name)
    pub fn checked(
        name: impl Into<String>,
        size: u64,
        content_type: impl Into<String>,
    ) -> Result<Self, IntakeError> {
        let file = Self::new(name, size, content_type);
        file.validate()?;
        Ok(file)
    }

    /// Lowercased text after the final `.`, or `None` when the name has no dot
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
    }
}
