//! Shared validation helpers for inbound HTTP adapters.
//!
//! Everything here runs before a handler touches the directory, so a request
//! rejected at this layer can never leave a partially-applied change behind.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId};

/// Upper bound for JSON request bodies.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

/// Validation error codes surfaced in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MalformedBody,
    UnsupportedContentType,
    PayloadTooLarge,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MalformedBody => "malformed_body",
            ErrorCode::UnsupportedContentType => "unsupported_content_type",
            ErrorCode::PayloadTooLarge => "payload_too_large",
        }
    }
}

fn classify(err: &JsonPayloadError) -> (ErrorCode, &'static str) {
    match err {
        JsonPayloadError::ContentType => (
            ErrorCode::UnsupportedContentType,
            "request body must be application/json",
        ),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            (ErrorCode::PayloadTooLarge, "request body is too large")
        }
        _ => (ErrorCode::MalformedBody, "request body is not a valid user"),
    }
}

/// Map a JSON extractor failure onto an `invalid_request` domain error.
pub fn json_payload_error(err: &JsonPayloadError) -> Error {
    let (code, message) = classify(err);
    Error::invalid_request(message).with_details(json!({
        "code": code.as_str(),
        "reason": err.to_string(),
    }))
}

/// JSON extractor configuration shared by every users endpoint.
///
/// Decode failures become structured `400` responses instead of Actix's
/// plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, req: &HttpRequest| {
            debug!(path = req.path(), error = %err, "rejecting undecodable body");
            json_payload_error(&err).into()
        })
}

/// Parse the `{id}` path segment.
///
/// Anything that is not an integer cannot name a stored record, so it is
/// reported as not found rather than as a malformed request.
pub fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse::<UserId>()
        .map_err(|_| Error::not_found(format!("user {raw} not found")))
}
