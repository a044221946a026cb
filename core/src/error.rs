use std::fmt;
use thiserror::Error;

/// The error type for form3 operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration error (missing host, key id or key path)
    ConfigInvalid,

    /// Private key file could not be read
    KeyLoad,

    /// Private key file does not hold a supported PEM encoded key
    KeyParse,

    /// The signing operation itself failed
    Signature,

    /// Authorization header cannot be built (empty signature)
    AuthHeader,

    /// Request cannot be built (empty parameters, invalid account, etc.)
    RequestInvalid,

    /// The API answered with an unexpected status
    ServiceError,

    /// Unexpected errors (network, I/O, decode errors, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Check if this error was raised while producing the authentication headers.
    ///
    /// Requests failing with such an error must not be sent.
    pub fn is_signing_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ConfigInvalid
                | ErrorKind::KeyLoad
                | ErrorKind::KeyParse
                | ErrorKind::Signature
                | ErrorKind::AuthHeader
        )
    }
}

// Convenience constructors
impl Error {
    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a key load error
    pub fn key_load(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyLoad, message)
    }

    /// Create a key parse error
    pub fn key_parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyParse, message)
    }

    /// Create a signature error
    pub fn signature(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Signature, message)
    }

    /// Create an authorization header error
    pub fn auth_header(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AuthHeader, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a service error
    pub fn service_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServiceError, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::KeyLoad => write!(f, "private key load failure"),
            ErrorKind::KeyParse => write!(f, "private key parse failure"),
            ErrorKind::Signature => write!(f, "signature failure"),
            ErrorKind::AuthHeader => write!(f, "authorization header failure"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
