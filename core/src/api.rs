//! Generic request helper: build, execute, validate.
//!
//! # Design
//! `ApiClient` owns nothing but a shared `Transport`, so clones are cheap and
//! concurrent calls never share per-request state. Every call performs at most
//! one round trip and returns the first error it meets.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{build_request, check_status, Headers, HttpMethod, HttpRequest, JsonObject};
use crate::transport::{ReqwestTransport, Transport};

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client over a `ReqwestTransport` configured from `config`.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build a request and execute it, returning the raw response body.
    pub async fn request(
        &self,
        url: &str,
        method: HttpMethod,
        headers: Option<&Headers>,
        body: Option<&JsonObject>,
    ) -> Result<Vec<u8>> {
        let request = build_request(url, method, headers, body)?;
        self.execute(request).await
    }

    /// Send `request` once and return the body of a 2xx response.
    pub async fn execute(&self, request: HttpRequest) -> Result<Vec<u8>> {
        let method = request.method;
        let url = request.url.to_string();
        tracing::debug!(%method, %url, "sending request");

        let response = self.transport.send(request).await?;
        let status = response.status;
        if let Some(id) = response.header("x-github-request-id") {
            tracing::debug!(%method, %url, status, request_id = id, "received response");
        } else {
            tracing::debug!(%method, %url, status, "received response");
        }

        check_status(response).inspect_err(|_| {
            tracing::warn!(%method, %url, status, "rejecting non-2xx response");
        })
    }
}
