//! File system errors

use std::io::ErrorKind;
use std::path::Path;

use super::UnitgenError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> UnitgenError {
    UnitgenError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> UnitgenError {
    UnitgenError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> UnitgenError {
    UnitgenError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an error from reading `path`, keeping "not found" distinct
pub fn from_read(path: &Path, err: &std::io::Error) -> UnitgenError {
    if err.kind() == ErrorKind::NotFound {
        not_found(path.display().to_string())
    } else {
        read_failed(path.display().to_string(), err.to_string())
    }
}
