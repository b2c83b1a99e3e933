//! Merge errors

use super::UnitgenError;

/// Creates a shape mismatch error
pub fn shape_mismatch(
    unit: impl Into<String>,
    path: impl Into<String>,
    expected: impl Into<String>,
    found: impl Into<String>,
) -> UnitgenError {
    UnitgenError::ShapeMismatch {
        unit: unit.into(),
        path: path.into(),
        expected: expected.into(),
        found: found.into(),
    }
}

/// Creates a missing key error
pub fn missing_key(unit: impl Into<String>, key: impl Into<String>) -> UnitgenError {
    UnitgenError::MissingKey {
        unit: unit.into(),
        key: key.into(),
    }
}

/// Creates a serialize failed error
pub fn serialize_failed(reason: impl Into<String>) -> UnitgenError {
    UnitgenError::SerializeFailed {
        reason: reason.into(),
    }
}
