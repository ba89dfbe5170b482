/// Authentication failures raised by the auth client. Display strings are
/// the user-visible messages callers render inline, so they are part of
/// the wire-level contract and must not drift.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("No authentication token available")]
    NoToken,

    #[error("Wrong username or password!")]
    LoginFailed { status: u16 },

    #[error("Registration failed")]
    RegisterFailed { status: u16 },

    #[error("Failed to get user permissions")]
    PermissionFetchFailed { status: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl ClientError {
    /// Create a new validation error
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an error from a non-success response status and body
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// True when the failure is one of the auth taxonomy variants
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

/// Result type alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
