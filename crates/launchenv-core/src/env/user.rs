//! Parsing of user-declared `name=value` variables.

use launchenv_config::MalformedVariablePolicy;
use tracing::warn;

use super::errors::EnvError;
use crate::exporter::Variable;

/// Split one entry at its first `=`. The value is kept verbatim.
///
/// Returns `None` when there is no `=` or the name is empty.
pub fn parse_user_variable(entry: &str) -> Option<Variable> {
    let (name, value) = entry.split_once('=')?;
    if name.is_empty() {
        return None;
    }
    Some(Variable::new(name, value))
}

/// Parse entries in order, applying `policy` to malformed ones.
pub fn parse_user_variables(
    entries: &[String],
    policy: MalformedVariablePolicy,
) -> Result<Vec<Variable>, EnvError> {
    let mut variables = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        match parse_user_variable(entry) {
            Some(variable) => variables.push(variable),
            None => match policy {
                MalformedVariablePolicy::Reject => {
                    return Err(EnvError::MalformedVariable {
                        entry: entry.clone(),
                    });
                }
                MalformedVariablePolicy::Skip => {
                    warn!(
                        event = "core.env.user_variable_skipped",
                        index = index,
                        reason = "missing '=' or empty name"
                    );
                }
            },
        }
    }

    Ok(variables)
}
