//! Error types for the clinic client.
//!
//! # Design
//! `ApiError` covers everything that can go wrong between building a request
//! and holding a typed value: the transport could not reach the server, the
//! server answered with a failure status, or the body did not match the
//! declared shape. `ValidationError` is local and raised before any request
//! exists. Views only ever see `ViewError`, which wraps both.

use thiserror::Error;

/// Errors returned by the HTTP wrapper and the resource operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` is the server's
    /// `detail` when it sent one, otherwise a generic status line.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    /// The transport could not reach the server (connection refused, DNS,
    /// reset while reading).
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not JSON of the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build an `HttpStatus` error, surfacing a FastAPI-style `{"detail": ".."}`
    /// message from the body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = server_detail(body).unwrap_or_else(|| format!("HTTP error! status: {status}"));
        ApiError::HttpStatus { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn server_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    (!detail.is_empty()).then(|| detail.to_string())
}

/// A form failed its local checks; no request was issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("age must be between 0 and {max}, got {age}")]
    AgeOutOfRange { age: u32, max: u32 },

    #[error("an animal must be selected")]
    NoAnimalSelected,
}

/// Any failure a view can run into.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
