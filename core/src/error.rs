//! Error types for the expense API client.
//!
//! # Design
//! `Validation` and `NoOp` fire before any request is built, so the caller
//! can render them without ever touching the network. `NotFound` gets a
//! dedicated variant because callers frequently distinguish "the resource
//! does not exist" from "the server returned an unexpected status." All
//! other non-2xx responses land in `Http` with the raw status code and body
//! for debugging.

use std::fmt;

/// Errors returned by `ExpenseClient` build and parse methods and by the
/// form-normalization layer.
#[derive(Debug)]
pub enum ClientError {
    /// A required form field was empty or unparseable. Raised before any
    /// request is built.
    Validation(String),

    /// A partial update carried no fields; no request should be issued.
    /// Rendered as a warning rather than an error.
    NoOp,

    /// The server returned 404 — the requested resource does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    Http { status: u16, body: String },

    /// A body declared as JSON could not be parsed. Carries the original
    /// parse error text.
    MalformedResponse(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The executor reported a transport-level failure.
    Network(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(msg) => write!(f, "validation failed: {msg}"),
            ClientError::NoOp => write!(f, "no fields to update"),
            ClientError::NotFound => write!(f, "resource not found"),
            ClientError::Http { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ClientError::MalformedResponse(msg) => {
                write!(f, "malformed response body: {msg}")
            }
            ClientError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ClientError::Network(msg) => write!(f, "network error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}
