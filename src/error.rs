//! Error type for configuration and generation.

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// Configuration that cannot produce any value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A record could not be constructed
    #[error("Failed to construct {type_name}: {reason}")]
    Construction {
        type_name: &'static str,
        reason: String,
    },

    /// Error reading a configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl GenerateError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
