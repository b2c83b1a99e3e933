//! Error types and handling for unitgen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`template`]: Template parsing errors
//! - [`merge`]: Merge-time shape errors
//! - [`units`]: Unit table errors

pub mod fs;
pub mod merge;
pub mod template;
pub mod units;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for unitgen operations
#[derive(Error, Diagnostic, Debug)]
pub enum UnitgenError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(
        code(unitgen::fs::not_found),
        help("Paths are resolved against the workspace directory (--workspace)")
    )]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(unitgen::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(unitgen::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(unitgen::fs::io_error))]
    IoError { message: String },

    // Template errors
    #[error("Failed to parse template expanded for unit '{unit}': {reason}")]
    #[diagnostic(
        code(unitgen::template::parse_failed),
        help("The template must be valid YAML once NAME, HOSTNAME and HANAME are substituted")
    )]
    TemplateParseFailed { unit: String, reason: String },

    #[error("Unsupported document for unit '{unit}': {reason}")]
    #[diagnostic(code(unitgen::template::unsupported_document))]
    UnsupportedDocument { unit: String, reason: String },

    // Merge errors
    #[error("Shape mismatch for unit '{unit}' at {path}: expected {expected}, found {found}")]
    #[diagnostic(
        code(unitgen::merge::shape_mismatch),
        help("Every unit must expand to a document of the same shape")
    )]
    ShapeMismatch {
        unit: String,
        path: String,
        expected: String,
        found: String,
    },

    #[error("Key '{key}' from unit '{unit}' is missing from the merged document")]
    #[diagnostic(
        code(unitgen::merge::missing_key),
        help("Every unit must expand to the same set of keys as the first unit")
    )]
    MissingKey { unit: String, key: String },

    #[error("Failed to serialize merged document: {reason}")]
    #[diagnostic(code(unitgen::merge::serialize_failed))]
    SerializeFailed { reason: String },

    // Unit table errors
    #[error("Failed to parse units file: {path}: {reason}")]
    #[diagnostic(
        code(unitgen::units::parse_failed),
        help("Expected a 'units' list of entries with 'id' and 'name'")
    )]
    UnitsParseFailed { path: String, reason: String },

    #[error("Invalid unit table: {message}")]
    #[diagnostic(code(unitgen::units::invalid))]
    UnitsInvalid { message: String },
}

impl From<std::io::Error> for UnitgenError {
    fn from(err: std::io::Error) -> Self {
        UnitgenError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, UnitgenError>;
