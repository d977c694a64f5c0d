//! Digitransit error types

use thiserror::Error;

/// Upstream error code reported when a place cannot be resolved unambiguously
pub const AMBIGUOUS_LOCATION_CODE: &str = "AMBIGUOUS_LOCATION";

/// Errors that can occur while talking to the Digitransit API
///
/// These never reach callers of the query operations directly; the client
/// folds them into a [`domain::TripsOutcome`] or an empty result.
#[derive(Debug, Error)]
pub enum DigitransitError {
    /// Connection to the routing service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The configured timeout in seconds
        timeout_secs: u64,
    },

    /// The service answered with a non-success HTTP status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
    },

    /// The service answered with an empty body
    #[error("Empty response body")]
    EmptyResponse,

    /// The body could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The GraphQL response carried an error list
    #[error("Upstream error {}: {message}", .code.as_deref().unwrap_or("<no code>"))]
    Upstream {
        /// Error code from the first error's extensions
        code: Option<String>,
        /// Error message from the first error
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl DigitransitError {
    /// Whether the upstream service reported an ambiguous location
    #[must_use]
    pub fn is_ambiguous_location(&self) -> bool {
        matches!(
            self,
            Self::Upstream { code: Some(code), .. } if code == AMBIGUOUS_LOCATION_CODE
        )
    }

    /// Whether this error stems from the transport rather than the payload
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::Timeout { .. }
                | Self::RequestFailed { .. }
                | Self::EmptyResponse
        )
    }
}
