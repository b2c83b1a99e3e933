//! Template errors

use super::UnitgenError;

/// Creates a template parse failed error
pub fn parse_failed(unit: impl Into<String>, reason: impl Into<String>) -> UnitgenError {
    UnitgenError::TemplateParseFailed {
        unit: unit.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported document error
pub fn unsupported_document(unit: impl Into<String>, reason: impl Into<String>) -> UnitgenError {
    UnitgenError::UnsupportedDocument {
        unit: unit.into(),
        reason: reason.into(),
    }
}
