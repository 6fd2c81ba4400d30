use std::error::Error;
use std::fmt;
use serde_json;

/// Custom error types for provider registry operations
#[derive(Debug)]
pub enum LlmError {
    /// Requested model is not present in the provider's catalog
    UnknownModel(String),
    /// No API key could be resolved from any configuration source
    MissingCredential(String),
    /// Provider returned a non-success response to an inference call
    InferenceFailed(String),
    /// Error from the HTTP client
    RequestError(reqwest::Error),
    /// Parsing error
    ParseError(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::UnknownModel(msg) => write!(f, "Unknown model: {}", msg),
            LlmError::MissingCredential(msg) => write!(f, "Missing credential: {}", msg),
            LlmError::InferenceFailed(msg) => write!(f, "Inference request failed: {}", msg),
            LlmError::RequestError(err) => write!(f, "Request error: {}", err),
            LlmError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            LlmError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for LlmError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LlmError::RequestError(err) => Some(err),
            _ => None,
        }
    }
}

/// Convert reqwest errors to LlmError
impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::RequestError(err)
    }
}

/// Convert serde_json errors to LlmError
impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::ParseError(err.to_string())
    }
}

/// Convert std::io::Error to LlmError
impl From<std::io::Error> for LlmError {
    fn from(err: std::io::Error) -> Self {
        LlmError::ConfigError(err.to_string())
    }
}

/// Convert toml parsing errors to LlmError
impl From<toml::de::Error> for LlmError {
    fn from(err: toml::de::Error) -> Self {
        LlmError::ConfigError(err.to_string())
    }
}

/// Result type alias for provider registry operations
pub type LlmResult<T> = Result<T, LlmError>;
