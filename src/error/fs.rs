//! File system errors

use std::fmt::Display;
use std::path::Path;

use super::BundlerError;

/// Creates an error for a failed `create_dir_all`
pub fn create_dir_failed(path: &Path, err: impl Display) -> BundlerError {
    BundlerError::CreateDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a directory that could not be listed
pub fn read_dir_failed(path: &Path, err: impl Display) -> BundlerError {
    BundlerError::ReadDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a file that could not be read
pub fn read_failed(path: &Path, err: impl Display) -> BundlerError {
    BundlerError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an error for a file that could not be written
pub fn write_failed(path: &Path, err: impl Display) -> BundlerError {
    BundlerError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
