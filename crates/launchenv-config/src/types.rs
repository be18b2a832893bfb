use serde::{Deserialize, Serialize};

/// What to do with a user variable entry that is not `name=value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedVariablePolicy {
    /// Fail the whole render with a malformed-variable error.
    #[default]
    Reject,
    /// Drop the entry and log a warning.
    Skip,
}

impl MalformedVariablePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedVariablePolicy::Reject => "reject",
            MalformedVariablePolicy::Skip => "skip",
        }
    }
}

impl std::fmt::Display for MalformedVariablePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MalformedVariablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(MalformedVariablePolicy::Reject),
            "skip" => Ok(MalformedVariablePolicy::Skip),
            _ => Err(format!(
                "Unknown malformed variable policy '{}'. Known policies: reject, skip",
                s
            )),
        }
    }
}

/// Operator configuration for environment rendering.
///
/// `system` entries keep their declaration order from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchEnvConfig {
    #[serde(default)]
    pub malformed_user_variables: MalformedVariablePolicy,

    /// Fixed system variables contributed ahead of the request-derived ones.
    #[serde(default)]
    pub system: toml::Table,

    /// Base application metadata merged under the request's own metadata.
    #[serde(default)]
    pub vcap_application: toml::Table,
}
