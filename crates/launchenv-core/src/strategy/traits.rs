//! Execution strategy trait definition.

use serde_json::{Map, Value};

/// An opaque system variable supplied by a strategy.
///
/// The value must be a JSON scalar; arrays and objects are rejected at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemVariable {
    pub name: String,
    pub value: Value,
}

impl SystemVariable {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Trait defining what an execution context contributes to the environment.
///
/// Staging and running contexts each provide their own platform variables and
/// application metadata. Choosing between them happens outside this crate.
pub trait EnvStrategy: Send + Sync {
    /// The canonical name of this strategy (e.g., "none", "static").
    fn name(&self) -> &'static str;

    /// Platform variables exported ahead of everything else, in order.
    fn system_environment_variables(&self) -> Vec<SystemVariable>;

    /// Platform-computed application metadata, the base of `VCAP_APPLICATION`.
    fn vcap_application(&self) -> Map<String, Value>;
}
