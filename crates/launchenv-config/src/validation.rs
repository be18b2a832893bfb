use crate::errors::ConfigError;
use crate::types::LaunchEnvConfig;

/// Whether `name` is a POSIX shell identifier: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

pub(crate) fn validate_config(config: &LaunchEnvConfig) -> Result<(), ConfigError> {
    for (name, value) in &config.system {
        if !is_valid_variable_name(name) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "system variable name '{}' is not a valid shell identifier",
                    name
                ),
            });
        }
        if matches!(value, toml::Value::Array(_) | toml::Value::Table(_)) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!(
                    "system variable '{}' must be a string, number, boolean, or datetime",
                    name
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_system(entries: &str) -> LaunchEnvConfig {
        LaunchEnvConfig {
            system: toml::from_str(entries).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_variable_names() {
        assert!(is_valid_variable_name("HOME"));
        assert!(is_valid_variable_name("_private"));
        assert!(is_valid_variable_name("VCAP_APP_PORT2"));

        assert!(!is_valid_variable_name(""));
        assert!(!is_valid_variable_name("2FAST"));
        assert!(!is_valid_variable_name("WITH-DASH"));
        assert!(!is_valid_variable_name("a b"));
        assert!(!is_valid_variable_name("$(date)"));
    }

    #[test]
    fn test_scalar_system_values_accepted() {
        let config = config_with_system("A = \"x\"\nB = 1\nC = true\n");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_structured_system_value_rejected() {
        let config = config_with_system("A = [1, 2]\n");
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("system variable 'A'"));
    }

    #[test]
    fn test_invalid_system_name_rejected() {
        let config = config_with_system("\"BAD-NAME\" = \"x\"\n");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("BAD-NAME"));
    }
}
