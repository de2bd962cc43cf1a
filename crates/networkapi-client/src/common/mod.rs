//! Common request/response helpers for the NetworkAPI client
//!
//! Provides the two shared clients every façade is built on:
//! - [`GenericClient`] for the legacy resources (XML bodies, `<erro>` codes)
//! - [`ApiClient`] for the `api/v3` and `api/v4` resources (JSON bodies, `detail` errors)

pub mod api;
pub mod query;

pub use api::ApiClient;

use crate::codes::ApiErrorKind;
use crate::error::NetworkApiError;
use crate::transport::{ApiRequest, AuthScheme, HttpMethod, RawResponse, Transport};
use crate::xml;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Join a base URL and a relative path with exactly one `/`
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}/{}", base_url, path.trim_start_matches('/'))
    }
}

/// Request/response helper for the legacy XML resources
#[derive(Debug, Clone)]
pub struct GenericClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl GenericClient {
    /// Create a client over a shared transport
    ///
    /// # Arguments
    /// * `base_url` - NetworkAPI base URL (e.g., "http://networkapi:8000/")
    /// * `transport` - Transport carrying the credentials
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url: String = base_url.into();
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full URL from a path
    pub fn build_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Encode `payload` (if any) and send it
    ///
    /// Returns the raw status and body; nothing is interpreted here.
    pub async fn submit(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<RawResponse, NetworkApiError> {
        let body = payload.map(xml::encode).transpose()?;
        let request = ApiRequest {
            method,
            url: self.build_url(path),
            body,
            content_type: "text/plain",
            auth: AuthScheme::Headers,
        };
        self.transport.execute(request).await
    }

    /// Extract `(codigo, descricao)` from a legacy error body
    pub fn get_error(body: &str) -> Option<(u32, String)> {
        let decoded = xml::decode(body, &[]).ok()?;
        let erro = decoded.get("erro")?;
        let code = erro.get("codigo")?.as_str()?.trim().parse().ok()?;
        let description = erro
            .get("descricao")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Some((code, description))
    }

    /// Translate a raw response into a mapping or a typed error
    ///
    /// * 200 - the body is decoded, applying `force_list`
    /// * 500 - the `<erro>` code is dispatched through the code table
    /// * anything else - the status itself is dispatched through the code table
    pub fn response(raw: &RawResponse, force_list: &[&str]) -> Result<Value, NetworkApiError> {
        match raw.status {
            200 => xml::decode(&raw.body, force_list),
            500 => match Self::get_error(&raw.body) {
                Some((code, description)) => {
                    warn!("NetworkAPI error {}: {}", code, description);
                    Err(NetworkApiError::from_code(code, description))
                }
                None => Err(NetworkApiError::Client {
                    status: raw.status,
                    detail: raw.body.clone(),
                }),
            },
            status => {
                warn!("NetworkAPI returned HTTP {}", status);
                match ApiErrorKind::from_code(u32::from(status)) {
                    Some(kind) => Err(NetworkApiError::Api {
                        kind,
                        code: u32::from(status),
                        description: raw.body.clone(),
                    }),
                    None => Err(NetworkApiError::Client {
                        status,
                        detail: raw.body.clone(),
                    }),
                }
            }
        }
    }

    /// Send a request and translate its response
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        payload: Option<&Value>,
        force_list: &[&str],
    ) -> Result<Value, NetworkApiError> {
        debug!("{} {}", method, path);
        let raw = self.submit(method, path, payload).await?;
        Self::response(&raw, force_list)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, force_list: &[&str]) -> Result<Value, NetworkApiError> {
        self.request(HttpMethod::Get, path, None, force_list).await
    }

    /// Make a POST request
    pub async fn post(
        &self,
        path: &str,
        payload: &Value,
        force_list: &[&str],
    ) -> Result<Value, NetworkApiError> {
        self.request(HttpMethod::Post, path, Some(payload), force_list).await
    }

    /// Make a PUT request
    pub async fn put(
        &self,
        path: &str,
        payload: &Value,
        force_list: &[&str],
    ) -> Result<Value, NetworkApiError> {
        self.request(HttpMethod::Put, path, Some(payload), force_list).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, NetworkApiError> {
        self.request(HttpMethod::Delete, path, None, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://api", "vlan/1/"), "http://api/vlan/1/");
        assert_eq!(join_url("http://api", "/vlan/1/"), "http://api/vlan/1/");
        assert_eq!(join_url("http://api", "https://other/x/"), "https://other/x/");
    }

    #[test]
    fn test_get_error() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\">\
                    <erro><codigo>0116</codigo><descricao>Vlan não encontrada</descricao></erro></networkapi>";
        assert_eq!(
            GenericClient::get_error(body),
            Some((116, "Vlan não encontrada".to_string()))
        );
        assert_eq!(GenericClient::get_error("Internal Server Error"), None);
    }

    #[test]
    fn test_response_dispatch() {
        let ok = RawResponse::new(200, "<networkapi versao=\"1.0\"><ambiente><id>7</id></ambiente></networkapi>");
        assert_eq!(
            GenericClient::response(&ok, &[]).unwrap(),
            serde_json::json!({ "ambiente": { "id": "7" } })
        );

        let coded = RawResponse::new(
            500,
            "<networkapi versao=\"1.0\"><erro><codigo>112</codigo><descricao>Ambiente não cadastrado</descricao></erro></networkapi>",
        );
        let err = GenericClient::response(&coded, &[]).unwrap_err();
        assert_eq!(err.kind(), Some(ApiErrorKind::EnvironmentNotFound));
        assert_eq!(err.to_string(), "Ambiente não cadastrado");

        let unauthorized = RawResponse::new(402, "Sem permissão");
        let err = GenericClient::response(&unauthorized, &[]).unwrap_err();
        assert_eq!(err.kind(), Some(ApiErrorKind::UserNotAuthorized));

        let unmapped = RawResponse::new(404, "Not Found");
        assert!(matches!(
            GenericClient::response(&unmapped, &[]),
            Err(NetworkApiError::Client { status: 404, .. })
        ));

        let bare_500 = RawResponse::new(500, "Internal Server Error");
        assert!(matches!(
            GenericClient::response(&bare_500, &[]),
            Err(NetworkApiError::Client { status: 500, .. })
        ));
    }
}
