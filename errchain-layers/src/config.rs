//! Request settings and the config file format

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings for a single request through the layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the config file the low layer opens
    pub config_path: String,
    /// Details attached when the config layer wraps a failure
    pub config_details: String,
    /// Details attached when the operation layer wraps a failure
    pub operation_details: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: "/path/to/config.json".to_string(),
            config_details: "config details".to_string(),
            operation_details: "my details".to_string(),
        }
    }
}

impl Settings {
    /// Default settings reading from `path`
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::default()
        }
    }
}

/// Parsed config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the configured operation
    pub name: String,
    /// Free-form values
    #[serde(default)]
    pub settings: BTreeMap<String, serde_json::Value>,
}
