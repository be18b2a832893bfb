//! Strategies supplying platform variables and application metadata.

pub mod traits;

use launchenv_config::LaunchEnvConfig;
use serde_json::{Map, Value};

pub use traits::{EnvStrategy, SystemVariable};

/// Strategy used when no execution context is registered: contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStrategy;

impl EnvStrategy for NoStrategy {
    fn name(&self) -> &'static str {
        "none"
    }

    fn system_environment_variables(&self) -> Vec<SystemVariable> {
        Vec::new()
    }

    fn vcap_application(&self) -> Map<String, Value> {
        Map::new()
    }
}

/// Fixed variables and metadata, typically from the operator's config file.
#[derive(Debug, Clone, Default)]
pub struct StaticStrategy {
    variables: Vec<SystemVariable>,
    vcap_application: Map<String, Value>,
}

impl StaticStrategy {
    pub fn new(variables: Vec<SystemVariable>, vcap_application: Map<String, Value>) -> Self {
        Self {
            variables,
            vcap_application,
        }
    }

    pub fn from_config(config: &LaunchEnvConfig) -> Self {
        let variables = config
            .system_variables()
            .into_iter()
            .map(|(name, value)| SystemVariable { name, value })
            .collect();
        Self::new(variables, config.vcap_application())
    }
}

impl EnvStrategy for StaticStrategy {
    fn name(&self) -> &'static str {
        "static"
    }

    fn system_environment_variables(&self) -> Vec<SystemVariable> {
        self.variables.clone()
    }

    fn vcap_application(&self) -> Map<String, Value> {
        self.vcap_application.clone()
    }
}
