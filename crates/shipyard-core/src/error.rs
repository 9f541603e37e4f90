//! Error types for Shipyard operations.
//!
//! Failures are classified by where they happen in a call: before the network
//! round-trip (encoding, configuration), during it (transport), or after it
//! (status contract, decoding). Callers match on [`Error::kind`] rather than on
//! message text.

use thiserror::Error;

/// Main error type for Shipyard operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The HTTP call could not be completed (connection refused, DNS, timeout).
    #[error("HTTP transport failed: {0}")]
    Transport(String),

    /// The server answered with `401 Unauthorized`.
    #[error("unauthorized")]
    Unauthorized,

    /// The server answered with a status other than 401 or the expected one.
    ///
    /// `message` is the response body, verbatim.
    #[error("{message}")]
    UnexpectedStatus {
        /// Status code returned by the server
        status: u16,
        /// Full response body text
        message: String,
    },

    /// The outbound request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// The response body could not be deserialized.
    #[error("Failed to decode response body: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

/// Specialized result type for Shipyard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a response.
    Transport,
    /// The server rejected the credentials.
    Unauthorized,
    /// The server returned a status outside the operation's contract.
    UnexpectedStatus,
    /// Encoding or decoding a JSON body failed.
    Codec,
    /// The client could not be constructed.
    Config,
}

impl Error {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Unauthorized => ErrorKind::Unauthorized,
            Self::UnexpectedStatus { .. } => ErrorKind::UnexpectedStatus,
            Self::Encode(_) | Self::Decode(_) => ErrorKind::Codec,
            Self::ConfigError(_) | Self::InvalidEndpoint(_) => ErrorKind::Config,
        }
    }

    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
        }
    }

    /// HTTP status carried by the error, if the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for the unauthorized sentinel.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}
