use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::DEFAULT_DECIMAL_PLACES;
use crate::status::StatusKey;
use crate::uptime::UPTIME_PATH;
use crate::StatusError;

/// Which fields a status display shows and how they are rendered.
///
/// Every field is optional in the JSON form:
///
/// ```json
/// { "decimal_places": 1, "keys": ["hostname", "memory-used", "uptime"] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatusConfig {
    pub decimal_places: usize,
    pub uptime_path: PathBuf,
    pub keys: Vec<StatusKey>,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            uptime_path: PathBuf::from(UPTIME_PATH),
            keys: StatusKey::ALL.to_vec(),
        }
    }
}

impl StatusConfig {
    pub fn from_json_str(content: &str) -> Result<Self, StatusError> {
        serde_json::from_str(content).map_err(|e| StatusError::ConfigError {
            message: format!("Invalid status config: {}", e),
            hint: Some("Expected a JSON object with decimal_places, uptime_path and keys".into()),
            code: Some(400),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StatusError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StatusError::FileError {
            message: format!("Failed to read config file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the config file exists".into()),
            code: Some(401),
        })?;
        Self::from_json_str(&content)
    }

    /// `<config dir>/status-fmt/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("status-fmt").join("config.json"))
    }

    /// Load from [`StatusConfig::default_path`], or fall back to defaults when
    /// there is no config file.
    pub fn load() -> Result<Self, StatusError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StatusConfig::default();
        assert_eq!(config.decimal_places, 2);
        assert_eq!(config.uptime_path, PathBuf::from("/proc/uptime"));
        assert_eq!(config.keys, StatusKey::ALL.to_vec());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StatusConfig::from_json_str(r#"{ "keys": ["hostname", "memory-used", "uptime"] }"#)
            .expect("Failed to parse config");

        assert_eq!(config.decimal_places, 2);
        assert_eq!(
            config.keys,
            vec![StatusKey::Hostname, StatusKey::MemoryUsed, StatusKey::Uptime]
        );
    }

    #[test]
    fn test_unknown_key_in_json() {
        let err = StatusConfig::from_json_str(r#"{ "keys": ["load"] }"#).unwrap_err();
        match err {
            StatusError::ConfigError { message, code, .. } => {
                assert!(message.contains("load"));
                assert_eq!(code, Some(400));
            }
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(StatusConfig::from_json_str(r#"{ "precision": 3 }"#).is_err());
        assert!(StatusConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        write!(file, r#"{{ "decimal_places": 0, "uptime_path": "/tmp/uptime" }}"#)
            .expect("Failed to write temp file");

        let config = StatusConfig::from_file(file.path()).expect("Failed to load config");
        assert_eq!(config.decimal_places, 0);
        assert_eq!(config.uptime_path, PathBuf::from("/tmp/uptime"));
        assert_eq!(config.keys.len(), StatusKey::ALL.len());
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let err = StatusConfig::from_file(dir.path().join("config.json")).unwrap_err();
        assert_eq!(err.code(), Some(401));
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = StatusConfig::default_path() {
            assert!(path.ends_with("status-fmt/config.json"));
        }
    }
}
