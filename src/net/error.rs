//! Error taxonomy for REST calls.
//!
//! The backend reports failures twice: as an HTTP status and as a `code` in
//! the response envelope. Both funnel through [`ApiError::from_code`] so
//! callers match on one enum regardless of which layer rejected the call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials, or an expired/invalid token.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The request body or parameters were rejected.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The resource already exists (e.g. duplicate username).
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Any other backend-reported failure.
    #[error("server error {code}: {message}")]
    Server { code: i32, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A response arrived but its body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a backend status or envelope code.
    pub fn from_code(code: i32, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            401 | 1003..=1006 => Self::Auth(message),
            400 => Self::Validation(message),
            1002 | 2002 | 3001 => Self::Conflict(message),
            403 | 4001 | 4002 => Self::Forbidden(message),
            404 | 1001 | 2001 => Self::NotFound(message),
            _ => Self::Server { code, message },
        }
    }

    /// Human-readable text for toasts and form errors.
    pub fn message(&self) -> &str {
        match self {
            Self::Auth(m)
            | Self::Validation(m)
            | Self::Conflict(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Network(m)
            | Self::Decode(m) => m,
            Self::Server { message, .. } => message,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
