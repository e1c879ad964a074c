//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port and drives the real reqwest
//! transport against it, so URL building, header handling, status checks and
//! decoding are exercised over actual HTTP.

use std::time::Duration;

use ghuser_core::{
    decode, decode_object, ApiClient, ApiError, ClientConfig, GitHubClient, GitHubUser, Headers, HttpMethod,
};
use mock_server::Echo;
use pretty_assertions::assert_eq;

/// Serve the mock API on an ephemeral port and return its base URL.
async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));
    format!("http://{addr}")
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(Some(Duration::from_secs(5)))
        .with_user_agent("ghuser-tests")
}

#[tokio::test]
async fn get_user_end_to_end() {
    let base_url = start_server().await;
    let github = GitHubClient::new(&config(&base_url)).unwrap();

    let user = github.get_user("insub4067").await.unwrap();
    assert_eq!(
        user,
        GitHubUser {
            login: "insub4067".to_string(),
            url: "https://api.github.com/users/insub4067".to_string(),
            name: "insub".to_string(),
            followers: 105,
            following: 128,
        }
    );
}

#[tokio::test]
async fn unknown_user_is_bad_response() {
    let base_url = start_server().await;
    let github = GitHubClient::new(&config(&base_url)).unwrap();

    let err = github.get_user("no-such-user").await.unwrap_err();
    assert!(err.is_bad_response());
    assert_eq!(err.status(), Some(404));
    assert!(err.body_text().unwrap().contains("Not Found"));
}

#[tokio::test]
async fn status_range_is_enforced_over_http() {
    let base_url = start_server().await;
    let api = ApiClient::new(&config(&base_url)).unwrap();

    for status in [200u16, 201, 299] {
        let bytes = api
            .request(&format!("{base_url}/status/{status}"), HttpMethod::Get, None, None)
            .await
            .unwrap();
        let body = decode_object(&bytes).unwrap();
        assert_eq!(body["status"], status);
    }
    for status in [300u16, 404, 500] {
        let err = api
            .request(&format!("{base_url}/status/{status}"), HttpMethod::Get, None, None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(status));
    }
}

#[tokio::test]
async fn headers_and_body_reach_the_server() {
    let base_url = start_server().await;
    let api = ApiClient::new(&config(&base_url)).unwrap();

    let mut headers = Headers::new();
    headers.insert("x-trace".to_string(), "abc".to_string());
    let body = serde_json::json!({"name": "insub", "followers": 105});

    let bytes = api
        .request(&format!("{base_url}/echo"), HttpMethod::Post, Some(&headers), body.as_object())
        .await
        .unwrap();
    let echo: Echo = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(echo.method, "POST");
    assert_eq!(echo.headers["x-trace"], "abc");
    assert_eq!(echo.headers["content-type"], "application/json");
    assert_eq!(echo.headers["user-agent"], "ghuser-tests");
    assert_eq!(echo.body, Some(body));
}

#[tokio::test]
async fn generic_decode_of_user_payload() {
    let base_url = start_server().await;
    let api = ApiClient::new(&config(&base_url)).unwrap();

    let bytes = api
        .request(&format!("{base_url}/users/insub4067"), HttpMethod::Get, None, None)
        .await
        .unwrap();
    let object = decode_object(&bytes).unwrap();
    assert_eq!(object["public_repos"], 66);
    assert!(object["email"].is_null());

    #[derive(Debug, serde::Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Counts {
        public_repos: u32,
        public_gists: u32,
    }
    let counts: Counts = decode(&bytes).unwrap();
    assert_eq!((counts.public_repos, counts.public_gists), (66, 1));
}

#[tokio::test]
async fn concurrent_fetches_are_independent() {
    let base_url = start_server().await;
    let github = GitHubClient::new(&config(&base_url)).unwrap();

    let (found, missing) = tokio::join!(github.get_user("insub4067"), github.get_user("ghost"));
    assert_eq!(found.unwrap().login, "insub4067");
    assert_eq!(missing.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let github = GitHubClient::new(&config(&format!("http://{addr}"))).unwrap();
    let err = github.get_user("insub4067").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "{err:?}");
}
