//! Validation modules

pub mod file;
pub mod policy;

pub use file::{
    normalize_extension, normalize_mime_type, validate_file_size, validate_file_type,
};
pub use policy::UploadPolicy;
