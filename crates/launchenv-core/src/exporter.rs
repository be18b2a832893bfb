//! Render variables as `export name="value";` statements.

use tracing::debug;

use crate::env::errors::EnvError;
use crate::escape::{EscapeMode, escape};

/// One `(name, value)` pair, in declaration order.
///
/// The name is passed through untouched; callers supply shell identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    name: String,
    value: String,
}

impl Variable {
    /// Any `ToString` value is accepted and converted before escaping.
    pub fn new(name: impl Into<String>, value: impl ToString) -> Self {
        Self {
            name: name.into(),
            value: value.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<N: Into<String>, V: ToString> From<(N, V)> for Variable {
    fn from((name, value): (N, V)) -> Self {
        Variable::new(name, value)
    }
}

/// Render `variables` in order, one newline-terminated statement each.
///
/// Duplicates are kept; a later declaration shadows an earlier one when sourced.
pub fn render(variables: &[Variable], mode: EscapeMode) -> Result<String, EnvError> {
    let mut script = String::new();

    for variable in variables {
        let escaped = escape(variable.value(), mode).map_err(|source| EnvError::Encoding {
            name: variable.name().to_string(),
            source,
        })?;
        script.push_str("export ");
        script.push_str(variable.name());
        script.push_str("=\"");
        script.push_str(&escaped);
        script.push_str("\";\n");
    }

    debug!(
        event = "core.env.render_completed",
        mode = %mode,
        count = variables.len()
    );

    Ok(script)
}
