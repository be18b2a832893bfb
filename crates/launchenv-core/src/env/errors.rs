use crate::errors::LaunchEnvError;
use crate::escape::EscapeError;

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("Malformed user variable '{entry}': expected name=value")]
    MalformedVariable { entry: String },

    #[error("Unsupported value for '{name}': {kind} cannot be exported as text")]
    UnsupportedValueType { name: String, kind: &'static str },

    #[error("Cannot export '{name}': {source}")]
    Encoding {
        name: String,
        #[source]
        source: EscapeError,
    },

    #[error("Failed to serialize {name}: {source}")]
    Serialization {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid export request: {message}")]
    InvalidRequest { message: String },
}

impl LaunchEnvError for EnvError {
    fn error_code(&self) -> &'static str {
        match self {
            EnvError::MalformedVariable { .. } => "ENV_MALFORMED_VARIABLE",
            EnvError::UnsupportedValueType { .. } => "ENV_UNSUPPORTED_VALUE_TYPE",
            EnvError::Encoding { .. } => "ENV_ENCODING_ERROR",
            EnvError::Serialization { .. } => "ENV_SERIALIZATION_ERROR",
            EnvError::InvalidRequest { .. } => "ENV_INVALID_REQUEST",
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, EnvError::Serialization { .. })
    }
}
