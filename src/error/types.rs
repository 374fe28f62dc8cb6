//! Error types for session token retrieval
//!
//! Every failure of a session token call, and of configuration loading,
//! surfaces through the single [`Error`] type. [`Error::kind`] classifies it.

use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was missing or empty
    #[error("Invalid argument {field}: {message}")]
    InvalidArgument {
        /// Name of the offending argument
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The endpoint answered with a non-success HTTP status
    #[error("Failed to initialize conversation: {status} {status_text}")]
    Http {
        /// Numeric HTTP status code
        status: u16,
        /// Canonical reason phrase, empty when unknown
        status_text: String,
    },

    /// The response body was not valid JSON
    #[error("Failed to parse session response: {0}")]
    ResponseParse(#[source] serde_json::Error),

    /// The response was JSON but not a usable session envelope
    #[error("Invalid response structure: {reason}")]
    InvalidResponse {
        /// Why the envelope was rejected
        reason: String,
    },

    /// The request could not be completed (DNS, connect, reset, body read)
    #[error("Transport error: {message}")]
    Transport {
        /// `source` and its nested causes, joined with `: `
        message: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Configuration errors
    #[error("Configuration error in {field}: {message}")]
    Config {
        /// The configuration field that has an error
        field: String,
        /// Error message describing the issue
        message: String,
    },

    /// TOML configuration parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport {
            message: describe_chain(&source),
            source,
        }
    }
}

/// Render an error followed by each nested cause not already in the text
fn describe_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();

    while let Some(inner) = cause {
        let text = inner.to_string();
        if !message.contains(&text) {
            message = format!("{}: {}", message, text);
        }
        cause = inner.source();
    }

    message
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    Http,
    ResponseParse,
    InvalidResponse,
    Transport,
    Config,
}

impl ErrorKind {
    /// Stable label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Http => "http",
            ErrorKind::ResponseParse => "response_parse",
            ErrorKind::InvalidResponse => "invalid_response",
            ErrorKind::Transport => "transport",
            ErrorKind::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(field: S, message: S) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        Self::Http {
            status,
            status_text: status_text.into(),
        }
    }

    /// Create an invalid response error
    pub fn invalid_response<S: Into<String>>(reason: S) -> Self {
        Self::InvalidResponse {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(field: S, message: S) -> Self {
        Self::Config {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Error::Http { .. } => ErrorKind::Http,
            Error::ResponseParse(..) => ErrorKind::ResponseParse,
            Error::InvalidResponse { .. } => ErrorKind::InvalidResponse,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Config { .. } | Error::Toml(..) | Error::Url(..) | Error::Io(..) => {
                ErrorKind::Config
            }
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
