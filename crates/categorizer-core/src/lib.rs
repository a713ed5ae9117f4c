//! Categorizer Core Library
//!
//! This crate provides the domain models, error type, configuration, upload
//! validation policy and size formatting shared by the intake controller and
//! the command-line tools.

pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::{megabytes_to_bytes, IntakeConfig, UploadProfile};
pub use error::{ErrorMetadata, IntakeError, LogLevel};
pub use format::{format_file_size, round_to_two_decimals};
pub use models::{
    Advisory, CandidateFile, ConfidenceThreshold, OutputFormat, Severity, SubmissionRequest,
};
pub use validation::UploadPolicy;
