use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestkitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid payload: expected {expected}, {reason}")]
    InvalidPayloadError { expected: String, reason: String },

    #[error("Route definition error in '{route}': {message}")]
    RouteDefinitionError { route: String, message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, TestkitError>;
