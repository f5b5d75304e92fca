//! Error types for the request client.
//!
//! # Design
//! Transport-level failures and lifecycle misuse are errors; HTTP statuses
//! are not. A 4xx/5xx response is a valid outcome whose interpretation
//! belongs to the caller, so no variant here carries a status code.

use std::fmt;

/// Errors returned by [`crate::PostRequest`].
#[derive(Debug)]
pub enum ClientError {
    /// The client could not be initialized — malformed target URL. No
    /// request was attempted.
    Init(String),

    /// The transfer engine failed during `perform` (DNS, connect, TLS,
    /// timeout). Carries the engine's diagnostic text; the accumulated body
    /// is incomplete and the instance is spent.
    Transfer(String),

    /// An outcome accessor was called before a successful `perform`.
    NotPerformed,

    /// `perform` was called again on an instance that already ran.
    AlreadyPerformed,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Init(msg) => write!(f, "initialization failed: {msg}"),
            ClientError::Transfer(msg) => write!(f, "transfer failed: {msg}"),
            ClientError::NotPerformed => write!(f, "request has not been performed"),
            ClientError::AlreadyPerformed => write!(f, "request was already performed"),
        }
    }
}

impl std::error::Error for ClientError {}
