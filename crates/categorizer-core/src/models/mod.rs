//! Data models for the intake workflow
//!
//! Each sub-module represents a specific feature area.

mod advisory;
mod file;
mod submission;

// Re-export all models for convenient imports
pub use advisory::*;
pub use file::*;
pub use submission::*;
