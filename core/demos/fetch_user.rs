//! Fetch one GitHub profile and print it.
//!
//! Usage: `cargo run -p ghuser-core --example fetch_user -- [username]`.
//! Point `GHUSER_BASE_URL` at the mock server to run offline.

use ghuser_core::{ClientConfig, GitHubClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "insub4067".to_string());
    let github = GitHubClient::new(&ClientConfig::from_env())?;

    let user = github.get_user(&username).await?;
    println!("{user:?}");
    Ok(())
}
