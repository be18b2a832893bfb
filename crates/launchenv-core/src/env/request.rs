use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::EnvError;

/// Resource limits from the originating request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Memory limit in megabytes.
    pub mem: u64,
}

/// Immutable snapshot of what the originating request contributes.
///
/// Service records are kept untyped here; only the allow-listed fields ever
/// reach the rendered environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub services: Vec<Map<String, Value>>,
    pub limits: Limits,
    #[serde(default)]
    pub vcap_application: Map<String, Value>,
    /// User variables as `name=value` strings, in declaration order.
    #[serde(default)]
    pub env: Vec<String>,
}

impl ExportRequest {
    /// Parse a JSON request body.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, EnvError> {
        serde_json::from_slice(bytes).map_err(|e| EnvError::InvalidRequest {
            message: e.to_string(),
        })
    }
}
