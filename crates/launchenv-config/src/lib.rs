//! Configuration for launchenv.
//!
//! Operators declare fixed system variables, base application metadata, and
//! the malformed user variable policy in a TOML file.

pub mod errors;
mod loading;
mod types;
mod validation;

pub use errors::ConfigError;
pub use loading::{
    CONFIG_ENV_VAR, ConfigSource, load_config, load_config_from, parse_config,
    resolve_config_source,
};
pub use types::{LaunchEnvConfig, MalformedVariablePolicy};
pub use validation::is_valid_variable_name;

impl LaunchEnvConfig {
    /// `[system]` entries in declaration order, converted to JSON scalars.
    pub fn system_variables(&self) -> Vec<(String, serde_json::Value)> {
        self.system
            .iter()
            .map(|(name, value)| (name.clone(), toml_to_json(value)))
            .collect()
    }

    /// `[vcap_application]` as a JSON object.
    pub fn vcap_application(&self) -> serde_json::Map<String, serde_json::Value> {
        self.vcap_application
            .iter()
            .map(|(key, value)| (key.clone(), toml_to_json(value)))
            .collect()
    }
}

/// Convert a TOML value to JSON. Datetimes become their RFC 3339 text.
fn toml_to_json(value: &toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s.clone()),
        toml::Value::Integer(i) => serde_json::Value::from(*i),
        toml::Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or_else(|| serde_json::Value::String(f.to_string())),
        toml::Value::Boolean(b) => serde_json::Value::Bool(*b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => serde_json::Value::Object(
            table
                .iter()
                .map(|(k, v)| (k.clone(), toml_to_json(v)))
                .collect(),
        ),
    }
}
