//! Resource types decoded from the GitHub API.
//!
//! # Design
//! Types declare only the fields they consume; everything else in the payload
//! is ignored. Field names follow the camelCase side of the key transform in
//! `decode`, so multi-word fields bind to snake_case payload keys.

use serde::{Deserialize, Serialize};

/// A GitHub user profile from `GET /users/{username}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GitHubUser {
    pub login: String,
    pub url: String,
    pub name: String,
    pub followers: u64,
    pub following: u64,
}
