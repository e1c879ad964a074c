//! Resource client for the GitHub users endpoint.
//!
//! # Design
//! `GitHubClient` holds a base URL and an `ApiClient`. It builds full URLs by
//! concatenation and leaves username validation to the server, so a malformed
//! name comes back as a `BadResponse`. The username is percent-encoded as one
//! path segment first, so it can never name a different endpoint.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::decode::decode;
use crate::error::{ApiError, Result};
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::GitHubUser;

/// Bytes that would end or split a path segment, plus `%` itself.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_url: String,
    api: ApiClient,
}

impl GitHubClient {
    /// Client for `config.base_url` over the default reqwest transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_api(&config.base_url, ApiClient::new(config)?))
    }

    pub fn with_transport(base_url: &str, transport: impl Transport + 'static) -> Self {
        Self::with_api(base_url, ApiClient::with_transport(transport))
    }

    pub fn with_api(base_url: &str, api: ApiClient) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of `username`'s profile.
    ///
    /// `.` and `..` fail with `InvalidUrl`: URL parsing resolves those
    /// segments even when percent-encoded, so they cannot address a user.
    pub fn user_url(&self, username: &str) -> Result<String> {
        if username == "." || username == ".." {
            return Err(ApiError::InvalidUrl(format!("{}/users/{username}", self.base_url)));
        }
        let segment = utf8_percent_encode(username, SEGMENT);
        Ok(format!("{}/users/{segment}", self.base_url))
    }

    /// Fetch and decode the profile of `username` with a bare GET.
    pub async fn get_user(&self, username: &str) -> Result<GitHubUser> {
        let bytes = self
            .api
            .request(&self.user_url(username)?, HttpMethod::Get, None, None)
            .await?;
        let user: GitHubUser = decode(&bytes)?;
        tracing::info!(login = %user.login, followers = user.followers, "fetched user");
        Ok(user)
    }
}
