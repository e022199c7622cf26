//! Uniform response envelope and display rendering.
//!
//! # Design
//! Every HTTP response is interpreted into the same `{ok, status, data}`
//! shape regardless of resource or verb, so the display surface has exactly
//! one thing to print. Interpretation is content-type driven: bodies the
//! server declares as JSON are parsed (a failure here is a real error, the
//! server lied about its own content-type); everything else is carried as a
//! plain string. A 204 has no body by definition and gets a fixed
//! placeholder.
//!
//! `render_outcome` is the handler boundary: it absorbs any `ClientError`
//! into `{"error": ...}` (or `{"warning": ...}` for no-op updates) so
//! nothing is thrown past it.

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::http::HttpResponse;

/// Normalized view of an HTTP response: `ok` is true iff the status is 2xx,
/// `data` is the interpreted body.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Envelope {
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    /// Interpret a response by status and content-type.
    ///
    /// - 204 yields `{"message": "No Content"}` regardless of body.
    /// - A JSON content-type parses the body; failure is
    ///   `MalformedResponse` with the original parse error text.
    /// - Any other body is carried as a plain string value.
    pub fn from_response(response: &HttpResponse) -> Result<Self, ClientError> {
        let data = if response.status == 204 {
            json!({ "message": "No Content" })
        } else if response
            .content_type()
            .is_some_and(|ct| ct.contains("application/json"))
        {
            serde_json::from_str(&response.body)
                .map_err(|e| ClientError::MalformedResponse(e.to_string()))?
        } else {
            Value::String(response.body.clone())
        };
        Ok(Envelope {
            ok: (200..300).contains(&response.status),
            status: response.status,
            data,
        })
    }

    /// Pretty-printed JSON text for the display region.
    pub fn render(&self) -> String {
        // Serializing a struct of primitives and a Value cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Render any outcome — success or failure — as display text. Errors become
/// `{"error": message}`, a no-op update becomes `{"warning": message}`.
pub fn render_outcome(outcome: Result<Envelope, ClientError>) -> String {
    match outcome {
        Ok(envelope) => envelope.render(),
        Err(ClientError::NoOp) => {
            serde_json::to_string_pretty(&json!({ "warning": ClientError::NoOp.to_string() }))
                .unwrap_or_default()
        }
        Err(err) => {
            serde_json::to_string_pretty(&json!({ "error": err.to_string() })).unwrap_or_default()
        }
    }
}
