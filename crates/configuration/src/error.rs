use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file or an environment override could not be read or deserialized.
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// The values parsed but describe an unusable dashboard.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}
