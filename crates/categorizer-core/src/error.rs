//! Error types module
//!
//! All intake failures are unified under the `IntakeError` enum. Validation
//! failures (`OversizedFile`, `UnsupportedType`) are recovered inside the
//! intake controller and surfaced to the user as an [`Advisory`]; the other
//! variants are returned to callers.

use crate::format::format_file_size;
use crate::models::{Advisory, Severity};

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented to the user
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "OVERSIZED_FILE")
    fn error_code(&self) -> &'static str;

    /// Severity of the advisory shown for this error
    fn severity(&self) -> Severity;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// User-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("File too large: {size} bytes exceeds the maximum of {max} bytes")]
    OversizedFile { size: u64, max: u64 },

    #[error("Unsupported file type: '{file_name}' ({content_type})")]
    UnsupportedType {
        file_name: String,
        content_type: String,
    },

    #[error("Not submittable: {0}")]
    NotSubmittable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<validator::ValidationErrors> for IntakeError {
    fn from(err: validator::ValidationErrors) -> Self {
        IntakeError::InvalidInput(format!("Validation error: {}", err))
    }
}

impl IntakeError {
    /// True for the two policy violations a candidate file can trigger
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            IntakeError::OversizedFile { .. } | IntakeError::UnsupportedType { .. }
        )
    }

    /// Build the dismissible user-facing advisory for this error
    pub fn to_advisory(&self) -> Advisory {
        Advisory::new(self.severity(), self.error_code(), self.client_message())
            .with_suggested_action(self.suggested_action())
    }
}

/// Static metadata for each variant: (error_code, severity, suggested_action, log_level).
fn intake_error_static_metadata(
    err: &IntakeError,
) -> (&'static str, Severity, Option<&'static str>, LogLevel) {
    match err {
        IntakeError::OversizedFile { .. } => (
            "OVERSIZED_FILE",
            Severity::Warning,
            Some("Choose a smaller file or split the data"),
            LogLevel::Debug,
        ),
        IntakeError::UnsupportedType { .. } => (
            "UNSUPPORTED_TYPE",
            Severity::Error,
            Some("Upload a CSV, Excel, JSON, or TXT file"),
            LogLevel::Debug,
        ),
        IntakeError::NotSubmittable(_) => (
            "NOT_SUBMITTABLE",
            Severity::Info,
            Some("Select a file and fill in the required fields"),
            LogLevel::Debug,
        ),
        IntakeError::InvalidConfig(_) => (
            "INVALID_CONFIG",
            Severity::Error,
            Some("Check the upload policy settings"),
            LogLevel::Error,
        ),
        IntakeError::InvalidInput(_) => (
            "INVALID_INPUT",
            Severity::Warning,
            Some("Check the value and try again"),
            LogLevel::Debug,
        ),
    }
}

impl ErrorMetadata for IntakeError {
    fn error_code(&self) -> &'static str {
        intake_error_static_metadata(self).0
    }

    fn severity(&self) -> Severity {
        intake_error_static_metadata(self).1
    }

    fn suggested_action(&self) -> Option<&'static str> {
        intake_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            IntakeError::OversizedFile { size, max } => format!(
                "File size must be no larger than {} (selected file is {})",
                format_file_size(*max),
                format_file_size(*size)
            ),
            IntakeError::UnsupportedType { file_name, .. } => format!(
                "'{}' is not a supported format. Please upload a valid file format (CSV, Excel, JSON, or TXT)",
                file_name
            ),
            IntakeError::NotSubmittable(ref msg) => msg.clone(),
            IntakeError::InvalidConfig(ref msg) => msg.clone(),
            IntakeError::InvalidInput(ref msg) => msg.clone(),
        }
    }

    fn log_level(&self) -> LogLevel {
        intake_error_static_metadata(self).3
    }
}
