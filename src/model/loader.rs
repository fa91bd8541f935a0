//! Load model descriptors from a JSON file.

use crate::error::ConfigError;
use crate::model::types::ModelConfig;
use std::path::Path;

/// Read a JSON array of model descriptors from disk.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<ModelConfig>, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))
}
