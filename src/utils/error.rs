use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unexpected payload: {message}")]
    UnexpectedPayload { message: String },
}

impl ProbeError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProbeError::TomlParse(_)
                | ProbeError::ConfigError { .. }
                | ProbeError::InvalidConfigValueError { .. }
                | ProbeError::MissingConfigError { .. }
        )
    }

    /// Process exit code for an error that ends a run.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            2
        } else {
            1
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ProbeError::Http(e) if e.is_connect() => {
                "Check that the service is running and reachable".to_string()
            }
            ProbeError::Http(_) => "Check the endpoint URL and network connectivity".to_string(),
            ProbeError::Io(_) => "Check file paths and permissions".to_string(),
            ProbeError::Serialization(_) | ProbeError::UnexpectedPayload { .. } => {
                "The service returned data in an unexpected format".to_string()
            }
            ProbeError::TomlParse(_) => "Make sure the config file is valid TOML".to_string(),
            ProbeError::MissingConfigError { field } if field == "backend.api_key" => format!(
                "Set {} or pass --api-key",
                crate::config::API_KEY_ENV
            ),
            ProbeError::MissingConfigError { field } => {
                format!("Provide a value for {}", field)
            }
            ProbeError::ConfigError { .. } | ProbeError::InvalidConfigValueError { .. } => {
                "Review the command line flags, environment and config file".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
