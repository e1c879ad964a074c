//! Client configuration.

use std::time::Duration;

/// Base URL of the public GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a user agent.
pub const DEFAULT_USER_AGENT: &str = concat!("ghuser/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings shared by the transport and the resource client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `GHUSER_BASE_URL` and `GHUSER_TIMEOUT_SECS`.
    ///
    /// A timeout of `0` disables the request timeout. Unparseable values are
    /// ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup("GHUSER_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("GHUSER_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(0) => config.timeout = None,
                Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid GHUSER_TIMEOUT_SECS"),
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_target_github() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.github.com");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert!(config.user_agent.starts_with("ghuser/"));
    }

    #[test]
    fn env_overrides_base_url_and_timeout() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GHUSER_BASE_URL", "http://127.0.0.1:3000"),
            ("GHUSER_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ClientConfig::from_lookup(lookup(&[("GHUSER_TIMEOUT_SECS", "0")]));
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("GHUSER_BASE_URL", "  "),
            ("GHUSER_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn builders_override_fields() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:3000")
            .with_timeout(None)
            .with_connect_timeout(Some(Duration::from_millis(250)))
            .with_user_agent("tests");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout, None);
        assert_eq!(config.connect_timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.user_agent, "tests");
    }
}
