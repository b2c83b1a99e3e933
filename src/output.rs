//! Reading templates and emitting merged documents

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::info;

use crate::error::{self, Result};

/// Resolve `path` against the workspace directory unless it is absolute
pub fn resolve(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}

/// Read a template file, trimming surrounding whitespace
pub fn read_template(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| error::fs::from_read(path, &e))?;
    Ok(content.trim().to_string())
}

/// Serialize a merged document as YAML
pub fn to_yaml(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| error::merge::serialize_failed(e.to_string()))
}

/// Write a rendered document, replacing any existing file
pub fn write_document(path: &Path, yaml: &str) -> Result<()> {
    fs::write(path, yaml)
        .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
    info!(path = %path.display(), bytes = yaml.len(), "wrote merged document");
    Ok(())
}
