//! Error types for the GitHub user client.
//!
//! # Design
//! Every operation fails with exactly one `ApiError` and callers see it
//! unchanged. Any status outside 200..=299 is a `BadResponse`; 4xx and 5xx are
//! not split into separate variants. The raw body is kept on the variant for
//! debugging but never parsed, since the remote error schema is not ours.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Why a payload could not be decoded into the requested shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The bytes are not valid JSON.
    Syntax,
    /// A required field is absent from the payload.
    MissingField,
    /// A field is present but has the wrong type or shape.
    TypeMismatch,
}

/// Errors returned by the request helper and the resource client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The URL string could not be parsed.
    #[error("invalid URL {0:?}")]
    InvalidUrl(String),

    /// A header name or value cannot be sent over HTTP.
    #[error("invalid header {0:?}")]
    InvalidHeader(String),

    /// The server answered with a status outside 200..=299.
    #[error("bad response: HTTP {status}")]
    BadResponse { status: u16, body: Vec<u8> },

    /// The top-level JSON value is not an object.
    #[error("JSON payload is not an object")]
    NotAnObject,

    /// The payload does not match the requested type.
    #[error("decoding failed: {message}")]
    Decode {
        kind: DecodeErrorKind,
        message: String,
    },

    /// The request body could not be serialized to JSON. Map bodies always
    /// serialize; typed bodies passed to `build_request_with` may not.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// No HTTP response was obtained at all.
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// Classify a `serde_json` failure into a `Decode` error.
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let message = err.to_string();
        let kind = match err.classify() {
            Category::Syntax | Category::Eof | Category::Io => DecodeErrorKind::Syntax,
            Category::Data if message.starts_with("missing field") => DecodeErrorKind::MissingField,
            Category::Data => DecodeErrorKind::TypeMismatch,
        };
        ApiError::Decode { kind, message }
    }

    pub fn is_bad_response(&self) -> bool {
        matches!(self, ApiError::BadResponse { .. })
    }

    /// HTTP status of a `BadResponse`, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The discarded response body as lossy UTF-8, if any.
    pub fn body_text(&self) -> Option<String> {
        match self {
            ApiError::BadResponse { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }
}
