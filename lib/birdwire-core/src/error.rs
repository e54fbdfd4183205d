//! Error types for birdwire.
//!
//! Structured API errors returned inside a response body are *not* errors
//! of this kind: they are data, see [`crate::ApiError`].

use derive_more::{Display, Error, From};

/// Main error type for birdwire operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Missing or inconsistent credentials, detected before any call.
    #[display("configuration error: {_0}")]
    #[from(skip)]
    Configuration(#[error(not(source))] String),

    /// A parameter name the endpoint does not accept.
    #[display("parameter '{name}' is not supported by endpoint '{endpoint}'")]
    #[from(skip)]
    UnsupportedParameter {
        /// Endpoint name.
        endpoint: &'static str,
        /// Offending parameter name, as supplied by the caller.
        name: String,
    },

    /// A parameter value that cannot be encoded where it is used.
    #[display("parameter '{name}' has unsupported value type {kind}")]
    #[from(skip)]
    UnsupportedValueType {
        /// Parameter name.
        name: String,
        /// Kind of the rejected value.
        kind: &'static str,
    },

    /// The selected auth scheme cannot be applied with the available credentials.
    #[display("authentication error: {_0}")]
    #[from(skip)]
    Authentication(#[error(not(source))] String),

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request configuration.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),

    /// Unexpected HTTP status outside the envelope protocol (token exchange).
    #[display("HTTP error {status}: {message}")]
    #[from(skip)]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message.
        message: String,
        /// Response body, if available.
        #[error(not(source))]
        body: Option<bytes::Bytes>,
    },

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// Query string serialization error.
    #[display("query serialization error: {_0}")]
    #[from]
    QuerySerialization(serde_html_form::ser::Error),

    /// The response body did not decode, with the JSON path of the failure.
    #[display("decode error at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// JSON path to the error (e.g., "data[0].created_at").
        path: String,
        /// Error message.
        message: String,
    },

    /// The last page was reached.
    #[display("no next page")]
    #[from(skip)]
    NoNextPage,
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create an unsupported parameter error.
    #[must_use]
    pub fn unsupported_parameter(endpoint: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedParameter {
            endpoint,
            name: name.into(),
        }
    }

    /// Create an unsupported value type error.
    #[must_use]
    pub fn unsupported_value_type(name: impl Into<String>, kind: &'static str) -> Self {
        Self::UnsupportedValueType {
            name: name.into(),
            kind,
        }
    }

    /// Create an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create an HTTP error with body.
    #[must_use]
    pub fn http_with_body(status: u16, message: impl Into<String>, body: bytes::Bytes) -> Self {
        Self::Http {
            status,
            message: message.into(),
            body: Some(body),
        }
    }

    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns `true` for failures raised by the transport (network, TLS, timeout).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Tls(_) | Self::Timeout | Self::InvalidRequest(_)
        )
    }

    /// Returns `true` if the failure was detected locally, before any network I/O.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_)
                | Self::UnsupportedParameter { .. }
                | Self::UnsupportedValueType { .. }
        )
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::unsupported_parameter("user_tweets", "max_result");
        assert_eq!(
            err.to_string(),
            "parameter 'max_result' is not supported by endpoint 'user_tweets'"
        );

        let err = Error::unsupported_value_type("reply", "object");
        assert_eq!(
            err.to_string(),
            "parameter 'reply' has unsupported value type object"
        );

        assert_eq!(Error::Timeout.to_string(), "request timeout");
        assert_eq!(Error::NoNextPage.to_string(), "no next page");

        let err = Error::decode("data[0].created_at", "premature end of input");
        assert_eq!(
            err.to_string(),
            "decode error at 'data[0].created_at': premature end of input"
        );
    }

    #[test]
    fn error_classification() {
        assert!(Error::Timeout.is_transport());
        assert!(Error::connection("refused").is_transport());
        assert!(Error::connection("refused").is_connection());
        assert!(!Error::NoNextPage.is_transport());

        assert!(Error::configuration("no keys").is_local());
        assert!(Error::unsupported_parameter("get_me", "x").is_local());
        assert!(!Error::authentication("no bearer").is_local());
    }

    #[test]
    fn error_status() {
        let err = Error::http_with_body(403, "Forbidden", bytes::Bytes::new());
        assert_eq!(err.status(), Some(403));
        assert_eq!(Error::Timeout.status(), None);
    }
}
