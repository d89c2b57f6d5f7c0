//! Error types for the employee API client.
//!
//! # Design
//! Validation failures are never errors here; they are data in
//! `FieldErrors`. `ApiError` only covers what can go wrong once a request
//! is built: encoding it, moving it over the wire, and reading the reply.
//! A non-2xx reply keeps whatever `message` the server put in its body so
//! the controller can surface it verbatim.

use thiserror::Error;

/// Errors returned by `EmployeeClient` and `Transport` implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received (connection refused, DNS, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    HttpError {
        status: u16,
        message: Option<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// The server-provided message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::HttpError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
