/// Errors that can occur while moving configuration values across the host boundary
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, Error>;
