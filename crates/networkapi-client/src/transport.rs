//! HTTP transport
//!
//! One blocking-per-call round trip against a fully qualified URL. The transport
//! attaches credentials and always hands back the status and the whole body, even for
//! 5xx responses, so the callers can parse structured errors out of it.
//!
//! [`Transport`] is the seam used for mocking: [`HttpTransport`] talks to the network,
//! `MockTransport` (feature `test-util`) answers from memory.

use crate::config::ClientConfig;
use crate::error::NetworkApiError;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use tracing::{debug, trace};

/// Header carrying the username on legacy requests
pub const HEADER_USERNAME: &str = "NETWORKAPI_USERNAME";
/// Header carrying the password on legacy requests
pub const HEADER_PASSWORD: &str = "NETWORKAPI_PASSWORD";
/// Header carrying the LDAP username on legacy requests
pub const HEADER_USER_LDAP: &str = "NETWORKAPI_USERLDAP";

/// HTTP verbs used by the NetworkAPI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Upper-case verb name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How credentials are attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `NETWORKAPI_USERNAME` / `NETWORKAPI_PASSWORD` / `NETWORKAPI_USERLDAP` headers (legacy XML resources)
    Headers,
    /// HTTP Basic auth (v3/v4 JSON resources)
    Basic,
}

/// A fully built request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: HttpMethod,
    /// Fully qualified URL
    pub url: String,
    /// Serialized body, if any
    pub body: Option<String>,
    /// Content type of the body
    pub content_type: &'static str,
    /// Credential scheme
    pub auth: AuthScheme,
}

/// Status code and complete body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded as UTF-8 (lossy)
    pub body: String,
}

impl RawResponse {
    /// Build a response from a status and body
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP round trip
///
/// This trait enables mocking of NetworkAPI calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Perform one request and return the status and full body
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, NetworkApiError>;
}

/// reqwest-backed transport carrying the connection credentials
pub struct HttpTransport {
    client: Client,
    username: String,
    password: SecretString,
    user_ldap: Option<String>,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("username", &self.username)
            .field("user_ldap", &self.user_ldap)
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport from client configuration
    ///
    /// # Arguments
    /// * `config` - Connection parameters; only credentials and timeout are used here
    pub fn new(config: &ClientConfig) -> Result<Self, NetworkApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(NetworkApiError::Http)?;
        Ok(Self::with_client(client, config))
    }

    /// Create a transport around a pre-built `reqwest::Client`
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            username: config.username.clone(),
            password: config.password.clone(),
            user_ldap: config.user_ldap.clone(),
        }
    }

    fn map_send_error(err: reqwest::Error) -> NetworkApiError {
        if err.is_connect() || err.is_timeout() {
            NetworkApiError::Connection(err)
        } else {
            NetworkApiError::Http(err)
        }
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, NetworkApiError> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        builder = match request.auth {
            AuthScheme::Headers => {
                let mut b = builder
                    .header(HEADER_USERNAME, &self.username)
                    .header(HEADER_PASSWORD, self.password.expose_secret());
                if let Some(user_ldap) = &self.user_ldap {
                    b = b.header(HEADER_USER_LDAP, user_ldap);
                }
                b
            }
            AuthScheme::Basic => builder
                .basic_auth(&self.username, Some(self.password.expose_secret()))
                .header("Accept", "application/json"),
        };

        if let Some(body) = request.body {
            trace!("request body: {}", body);
            builder = builder.header("Content-Type", request.content_type).body(body);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(Self::map_send_error)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!("{} {} -> {}", request.method, request.url, status);
        trace!("response body: {}", body);

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_response_success_range() {
        assert!(RawResponse::new(200, "").is_success());
        assert!(RawResponse::new(204, "").is_success());
        assert!(!RawResponse::new(404, "").is_success());
        assert!(!RawResponse::new(500, "").is_success());
    }

    #[test]
    fn test_transport_debug_hides_password() {
        let config = ClientConfig::new("http://networkapi/", "admin", "hunter2");
        let transport = HttpTransport::new(&config).unwrap();
        let rendered = format!("{transport:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
    }
}
