use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Header GitHub attaches to every API response.
pub const REQUEST_ID_HEADER: &str = "x-github-request-id";

/// What `/echo` saw, returned as the response body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

/// User payloads keyed by login.
pub type Db = Arc<RwLock<HashMap<String, Value>>>;

/// A trimmed copy of what `api.github.com/users/insub4067` returns.
pub fn insub4067() -> Value {
    json!({
        "login": "insub4067",
        "id": 85481204,
        "node_id": "MDQ6VXNlcjg1NDgxMjA0",
        "avatar_url": "https://avatars.githubusercontent.com/u/85481204?v=4",
        "gravatar_id": "",
        "url": "https://api.github.com/users/insub4067",
        "html_url": "https://github.com/insub4067",
        "followers_url": "https://api.github.com/users/insub4067/followers",
        "repos_url": "https://api.github.com/users/insub4067/repos",
        "type": "User",
        "site_admin": false,
        "name": "insub",
        "company": "Social Investing Lab",
        "blog": "https://insubkim.tistory.com/",
        "location": "korea",
        "email": null,
        "hireable": null,
        "bio": "iOS Developer",
        "twitter_username": null,
        "public_repos": 66,
        "public_gists": 1,
        "followers": 105,
        "following": 128,
        "created_at": "2021-06-07T07:37:55Z",
        "updated_at": "2023-04-24T01:17:10Z"
    })
}

/// Router seeded with the `insub4067` fixture.
pub fn app() -> Router {
    let users = HashMap::from([("insub4067".to_string(), insub4067())]);
    app_with(Arc::new(RwLock::new(users)))
}

/// Router over a caller-supplied user table.
pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/users/{username}", get(get_user))
        .route("/status/{code}", any(status))
        .route("/echo", any(echo))
        .layer(axum::middleware::map_response(add_request_id))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn add_request_id(mut response: Response) -> Response {
    if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

async fn get_user(State(db): State<Db>, Path(username): Path<String>) -> Response {
    let users = db.read().await;
    match users.get(&username) {
        Some(user) => Json(user.clone()).into_response(),
        None => {
            tracing::info!(%username, "unknown user");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "message": "Not Found",
                    "documentation_url": "https://docs.github.com/rest/users/users#get-a-user"
                })),
            )
                .into_response()
        }
    }
}

/// Answer with whatever status the path names.
async fn status(Path(code): Path<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, Json(json!({ "status": code }))).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn echo(method: Method, headers: HeaderMap, body: Bytes) -> Response {
    let body = if body.is_empty() {
        None
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => Some(value),
            Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        }
    };
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    Json(Echo {
        method: method.to_string(),
        headers,
        body,
    })
    .into_response()
}
