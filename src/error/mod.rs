//! Error types and handling for component-bundle
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//!
//! Constructors for the file system variants live in [`fs`].

pub mod fs;

pub use fs::{
    create_dir_failed, read_dir_failed, read_failed as file_read_failed,
    write_failed as file_write_failed,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundling operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlerError {
    // Input errors
    #[error("Input directory '{path}' must exist and be a directory.")]
    #[diagnostic(
        code(component_bundle::input::invalid_dir),
        help("Pass the path of an existing directory as the first argument")
    )]
    InputDirInvalid { path: String },

    // File system errors
    #[error("Failed to create directory '{path}': {reason}")]
    #[diagnostic(code(component_bundle::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(component_bundle::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    #[diagnostic(code(component_bundle::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(component_bundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(component_bundle::fs::io_error))]
    IoError { message: String },

    // Ordering errors
    #[error("Failed to load collation data: {reason}")]
    #[diagnostic(code(component_bundle::bundle::collator_unavailable))]
    CollatorUnavailable { reason: String },

    // Serialization errors
    #[error("Failed to serialize bundle: {reason}")]
    #[diagnostic(code(component_bundle::bundle::serialize_failed))]
    SerializeFailed { reason: String },
}

impl From<std::io::Error> for BundlerError {
    fn from(err: std::io::Error) -> Self {
        BundlerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BundlerError {
    fn from(err: serde_json::Error) -> Self {
        BundlerError::SerializeFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlerError>;
