//! Client configuration
//!
//! Connection parameters shared by every façade: base URL, credentials and an
//! optional request timeout. Loaded explicitly or from `NETWORKAPI_*` environment variables.

use crate::error::NetworkApiError;
use secrecy::SecretString;
use std::env;
use std::time::Duration;

/// Environment variable holding the base API URL
pub const ENV_URL: &str = "NETWORKAPI_URL";
/// Environment variable holding the username
pub const ENV_USERNAME: &str = "NETWORKAPI_USERNAME";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "NETWORKAPI_PASSWORD";
/// Environment variable holding the optional LDAP username
pub const ENV_USER_LDAP: &str = "NETWORKAPI_USER_LDAP";
/// Environment variable holding the optional request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "NETWORKAPI_TIMEOUT_SECS";

/// Connection parameters for a NetworkAPI server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL (e.g., "http://networkapi.example.com/")
    pub url: String,
    /// Username sent on every request
    pub username: String,
    /// Password sent on every request
    pub password: SecretString,
    /// LDAP username, sent only when set
    pub user_ldap: Option<String>,
    /// Request timeout; `None` waits until the socket resolves
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration without LDAP user or timeout
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
            user_ldap: None,
            timeout: None,
        }
    }

    /// Set the LDAP username
    #[must_use]
    pub fn with_user_ldap(mut self, user_ldap: impl Into<String>) -> Self {
        self.user_ldap = Some(user_ldap.into());
        self
    }

    /// Set a request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from `NETWORKAPI_*` environment variables.
    ///
    /// `NETWORKAPI_URL`, `NETWORKAPI_USERNAME` and `NETWORKAPI_PASSWORD` are required.
    pub fn from_env() -> Result<Self, NetworkApiError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NetworkApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    NetworkApiError::Config(format!("{key} environment variable is required"))
                })
        };

        let mut config = Self::new(
            required(ENV_URL)?,
            required(ENV_USERNAME)?,
            required(ENV_PASSWORD)?,
        );

        if let Some(user_ldap) = lookup(ENV_USER_LDAP).filter(|value| !value.is_empty()) {
            config.user_ldap = Some(user_ldap);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                NetworkApiError::Config(format!("{ENV_TIMEOUT_SECS} must be a number of seconds, got '{raw}'"))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup(&[
            (ENV_URL, "http://networkapi:8000/"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "secret"),
            (ENV_USER_LDAP, "admin.ldap"),
            (ENV_TIMEOUT_SECS, "15"),
        ]))
        .unwrap();

        assert_eq!(config.url, "http://networkapi:8000/");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password.expose_secret(), "secret");
        assert_eq!(config.user_ldap.as_deref(), Some("admin.ldap"));
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_from_lookup_missing_password() {
        let result = ClientConfig::from_lookup(lookup(&[
            (ENV_URL, "http://networkapi:8000/"),
            (ENV_USERNAME, "admin"),
        ]));
        assert!(matches!(result, Err(NetworkApiError::Config(msg)) if msg.contains(ENV_PASSWORD)));
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup(&[
            (ENV_URL, "http://networkapi:8000/"),
            (ENV_USERNAME, "admin"),
            (ENV_PASSWORD, "secret"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert!(matches!(result, Err(NetworkApiError::Config(_))));
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let config = ClientConfig::new("http://networkapi/", "admin", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
