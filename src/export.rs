// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::status::StatusEntry;
use crate::StatusError;

/// Export resolved status entries as a pretty-printed JSON object.
///
/// Keys appear in entry order:
///
/// ```json
/// {
///   "hostname": "box",
///   "uptime": "3 hours"
/// }
/// ```
pub fn export_status_to_json(entries: &[StatusEntry]) -> Result<String, StatusError> {
    let mut map = Map::new();
    for entry in entries {
        map.insert(entry.key.to_string(), Value::String(entry.value.clone()));
    }

    serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| StatusError::ConfigError {
        message: format!("Failed to serialize status: {}", e),
        hint: None,
        code: Some(500),
    })
}

pub fn export_status_to_file<P: AsRef<Path>>(entries: &[StatusEntry], path: P) -> Result<(), StatusError> {
    let path = path.as_ref();
    let json = export_status_to_json(entries)?;
    fs::write(path, json).map_err(|e| StatusError::FileError {
        message: format!("Failed to write status export: {}", e),
        path: path.to_string_lossy().to_string(),
        hint: None,
        code: Some(501),
    })
}
