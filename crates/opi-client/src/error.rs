//! Error types shared by the OPI client operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenience alias for client results.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by [`crate::VrfClient`] and [`crate::NvmeControllerClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured server address could not be parsed.
    #[error("invalid server address '{address}': {reason}")]
    InvalidAddress {
        /// Address as supplied by the caller.
        address: String,
        /// Parser diagnostic for the rejected address.
        reason: String,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client {
        /// Underlying builder failure.
        source: reqwest::Error,
    },
    /// The request never produced a response from the server.
    #[error("{operation} request failed")]
    Request {
        /// Operation that issued the request.
        operation: &'static str,
        /// Underlying transport failure.
        source: reqwest::Error,
    },
    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {operation} response")]
    Decode {
        /// Operation that issued the request.
        operation: &'static str,
        /// Underlying decode failure.
        source: reqwest::Error,
    },
    /// The server rejected the request.
    #[error("{operation} failed: {message}")]
    Api {
        /// Operation that issued the request.
        operation: &'static str,
        /// Status code returned by the server.
        status: StatusCode,
        /// Human readable failure summary.
        message: String,
    },
}
