//! Command helper utilities

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, UnitgenError};
use crate::output;
use crate::units::UnitTable;

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| UnitgenError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Load the unit table from `units`, or fall back to the built-in table
pub fn load_units(workspace: &Path, units: Option<&Path>) -> Result<UnitTable> {
    match units {
        Some(path) => {
            let path = output::resolve(workspace, path);
            let table = UnitTable::load(&path)?;
            debug!(path = %path.display(), units = table.len(), "loaded unit table");
            Ok(table)
        }
        None => Ok(UnitTable::default()),
    }
}
