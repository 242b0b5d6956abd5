//! Error types exposed by the dashboard data-access layer.

use thiserror::Error;

/// Errors surfaced while configuring the client or talking to the backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    /// The configured API base URL could not be parsed.
    #[error("API base URL is invalid: {0}")]
    InvalidBaseUrl(String),

    /// The bearer token was supplied but empty.
    #[error("API token must not be blank")]
    BlankToken,

    /// The backend rejected the request credentials.
    #[error("backend rejected the credentials: {message}")]
    Authentication {
        /// Status line and message returned with the 401/403 response.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("backend API error: {message}")]
    Api {
        /// Status and response detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the backend.
    #[error("network error talking to the backend: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body did not match the expected payload shape.
    #[error("unexpected response payload: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
