//! HTTP request and response descriptors.
//!
//! # Design
//! Requests and responses are plain data. `build_request` validates the URL
//! and serializes the body without touching the network; a `Transport` turns
//! an `HttpRequest` into an `HttpResponse`, and `check_status` decides whether
//! that response counts as a success.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use url::Url;

use crate::error::{ApiError, Result};

/// Request headers supplied by the caller. Keys are unique.
pub type Headers = BTreeMap<String, String>;

/// Generic JSON object: string keys mapped to dynamically typed values.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(format!("unsupported HTTP method: {other}")),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built once by `build_request` and consumed by a single `Transport::send`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Build a request descriptor from a URL string, method, headers and body.
///
/// Fails with `InvalidUrl` when `url` does not parse as an absolute URL, so an
/// empty or scheme-less string never reaches the network. Each header entry is
/// checked and appended individually. A JSON body gets
/// `content-type: application/json` unless the caller already set one.
pub fn build_request(
    url: &str,
    method: HttpMethod,
    headers: Option<&Headers>,
    body: Option<&JsonObject>,
) -> Result<HttpRequest> {
    build_request_with(url, method, headers, body)
}

/// Same as `build_request`, but the body is any serde-serializable value.
pub fn build_request_with<B: Serialize + ?Sized>(
    url: &str,
    method: HttpMethod,
    headers: Option<&Headers>,
    body: Option<&B>,
) -> Result<HttpRequest> {
    let url = Url::parse(url).map_err(|_| ApiError::InvalidUrl(url.to_string()))?;

    let mut request = HttpRequest {
        method,
        url,
        headers: Vec::new(),
        body: None,
    };

    if let Some(headers) = headers {
        for (name, value) in headers {
            if HeaderName::from_bytes(name.as_bytes()).is_err() || HeaderValue::from_str(value).is_err() {
                return Err(ApiError::InvalidHeader(name.clone()));
            }
            request.headers.push((name.clone(), value.clone()));
        }
    }

    if let Some(body) = body {
        let bytes = serde_json::to_vec(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        if request.header("content-type").is_none() {
            request
                .headers
                .push(("content-type".to_string(), "application/json".to_string()));
        }
        request.body = Some(bytes);
    }

    Ok(request)
}

/// Reject any status outside 200..=299.
pub fn check_status(response: HttpResponse) -> Result<Vec<u8>> {
    if (200..=299).contains(&response.status) {
        return Ok(response.body);
    }
    Err(ApiError::BadResponse {
        status: response.status,
        body: response.body,
    })
}
