//! HTTP transport types and the JSON request/response wrapper.
//!
//! # Design
//! Requests and responses are plain data. `ClinicClient` builds
//! `HttpRequest` values and `parse_json` turns an `HttpResponse` into a typed
//! value, neither touching the network. A `Transport` executes the round-trip
//! in between; `send` is the single dispatch point so every failure is logged
//! exactly once before it propagates. Nothing here retries or times out.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub const CONTENT_TYPE: &str = "content-type";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data, with an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Caller-supplied options for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST whose body is `payload` serialized as JSON.
    pub fn post_json<B: Serialize>(payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: HttpMethod::Post,
            body: Some(body),
            headers: Vec::new(),
        })
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Merge caller headers over the defaults. Names compare case-insensitively
/// and the caller wins on conflict.
pub fn merge_headers(
    defaults: &[(&str, &str)],
    caller: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .filter(|(name, _)| !caller.iter().any(|(c, _)| c.eq_ignore_ascii_case(name)))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    merged.extend(caller);
    merged
}

/// Decode a successful response into `T`.
///
/// Non-2xx statuses become `ApiError::HttpStatus` and bodies that do not match
/// `T` become `ApiError::Decode`. Both are logged before returning.
pub fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        let err = ApiError::from_status(response.status, &response.body);
        tracing::error!(status = response.status, error = %err, "API error");
        return Err(err);
    }
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::error!(error = %e, "API error: unexpected response body");
        ApiError::Decode(e.to_string())
    })
}

/// Executes an `HttpRequest`.
///
/// Implementations must return non-2xx responses as data; only failures to
/// complete the exchange at all are errors, and those are `ApiError::Network`.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Run `request` through `transport`, logging transport failures.
pub fn send<T: Transport + ?Sized>(
    transport: &T,
    request: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    tracing::debug!(method = request.method.as_str(), url = %request.url, "dispatching request");
    transport.execute(request).inspect_err(|err| {
        tracing::error!(error = %err, "API error");
    })
}
