//! Error types for the aequery service.

use thiserror::Error;

/// Main error type for aequery operations.
#[derive(Error, Debug)]
pub enum AeQueryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Dataset-related errors (CSV loading, subject lookup).
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Adverse-event data file not found: {0}")]
    SourceMissing(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset has no columns")]
    EmptyHeader,

    #[error("Subject not found: {0}")]
    SubjectNotFound(String),
}

/// Model invocation errors. A failed or malformed model response is
/// terminal for that resolution attempt; it is never downgraded to the
/// rule-based strategy.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("API key not provided and OPENAI_API_KEY env var not set")]
    MissingCredential,

    #[error("API error: {0}")]
    Api(String),

    #[error("Model response did not match the expected schema: {0}")]
    MalformedResponse(String),
}

/// Filter compilation and evaluation errors.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
}

/// Result type alias for aequery operations.
pub type Result<T> = std::result::Result<T, AeQueryError>;
