//! Typed async client for the GitHub users endpoint.
//!
//! # Overview
//! Builds an HTTP request from a URL string, method, optional headers and an
//! optional JSON body; executes it through a `Transport`; rejects any status
//! outside 200..=299; decodes the payload into a typed value or a generic
//! JSON object.
//!
//! # Design
//! - `http` describes requests and responses as plain data and validates
//!   statuses. It never performs I/O.
//! - `transport` is the only I/O seam. `ReqwestTransport` is the default;
//!   tests plug in their own.
//! - `decode` maps snake_case payload keys onto camelCase fields before
//!   structural decoding and ignores fields a type does not declare.
//! - `GitHubClient` composes the above for `GET /users/{username}`.

pub mod api;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::ApiClient;
pub use client::GitHubClient;
pub use config::ClientConfig;
pub use decode::{decode, decode_object, snake_to_camel};
pub use error::{ApiError, DecodeErrorKind, Result};
pub use http::{build_request, build_request_with, Headers, HttpMethod, HttpRequest, HttpResponse, JsonObject};
pub use transport::{ReqwestTransport, Transport};
pub use types::GitHubUser;
