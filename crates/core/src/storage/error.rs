use thiserror::Error;

/// Errors that can occur during gateway operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The database service rejected the request.
    #[error("{code}: {message}")]
    Service { code: String, message: String },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Timeout waiting for table '{0}' to become active")]
    TableActivationTimeout(String),
}

impl GatewayError {
    /// Creates a service error from a code and a message.
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
