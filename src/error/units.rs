//! Unit table errors

use super::UnitgenError;

/// Creates a units file parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> UnitgenError {
    UnitgenError::UnitsParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid unit table error
pub fn invalid(message: impl Into<String>) -> UnitgenError {
    UnitgenError::UnitsInvalid {
        message: message.into(),
    }
}
