//! JSON request/response helper for the `api/v3` and `api/v4` resources

use super::join_url;
use super::query::{join_ids, prepare_url};
use crate::error::NetworkApiError;
use crate::models::QueryOptions;
use crate::transport::{ApiRequest, AuthScheme, HttpMethod, RawResponse, Transport};
use crate::validation::require_ids;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP client wrapper for the JSON resources
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ApiClient {
    /// Create a client over a shared transport
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

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, NetworkApiError> {
        let body = body.map(serde_json::to_string).transpose()?;
        let url = self.build_url(path);
        debug!("{} {}", method, url);

        let raw = self
            .transport
            .execute(ApiRequest {
                method,
                url,
                body,
                content_type: "application/json",
                auth: AuthScheme::Basic,
            })
            .await?;

        Self::response(&raw)
    }

    /// Translate a raw response: 2xx bodies are parsed, anything else becomes
    /// [`NetworkApiError::Client`] carrying the server's `detail`
    pub fn response(raw: &RawResponse) -> Result<Value, NetworkApiError> {
        if raw.is_success() {
            if raw.body.trim().is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&raw.body)?);
        }

        let detail = Self::error_detail(&raw.body);
        warn!("NetworkAPI returned HTTP {}: {}", raw.status, detail);
        Err(NetworkApiError::Client {
            status: raw.status,
            detail,
        })
    }

    fn error_detail(body: &str) -> String {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => match map.get("detail") {
                Some(Value::String(detail)) => detail.clone(),
                Some(other) => other.to_string(),
                None => body.to_string(),
            },
            _ => body.to_string(),
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Value, NetworkApiError> {
        self.send(HttpMethod::Get, path, None).await
    }

    /// Make a POST request
    pub async fn post(&self, path: &str, body: &Value) -> Result<Value, NetworkApiError> {
        self.send(HttpMethod::Post, path, Some(body)).await
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Value, NetworkApiError> {
        self.send(HttpMethod::Post, path, None).await
    }

    /// Make a PUT request
    pub async fn put(&self, path: &str, body: &Value) -> Result<Value, NetworkApiError> {
        self.send(HttpMethod::Put, path, Some(body)).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Value, NetworkApiError> {
        self.send(HttpMethod::Delete, path, None).await
    }

    /// GET `path` with query options applied
    pub async fn search(&self, path: &str, options: &QueryOptions) -> Result<Value, NetworkApiError> {
        self.get(&prepare_url(path, options)?).await
    }

    /// GET `path{ids}/` with query options applied
    pub async fn get_by_ids(
        &self,
        path: &str,
        ids: &[u64],
        options: &QueryOptions,
    ) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        let uri = format!("{}{}/", path, join_ids(&ids));
        self.get(&prepare_url(&uri, options)?).await
    }

    /// POST `{key: items}` to `path`
    pub async fn create_many(&self, path: &str, key: &str, items: &[Value]) -> Result<Value, NetworkApiError> {
        self.post(path, &json!({ key: items })).await
    }

    /// PUT `{key: items}` to `path{ids}/`, taking each id from the item's `id` field
    pub async fn update_many(&self, path: &str, key: &str, items: &[Value]) -> Result<Value, NetworkApiError> {
        let ids = items
            .iter()
            .map(|item| {
                item.get("id").and_then(Value::as_u64).ok_or_else(|| {
                    NetworkApiError::invalid_parameter(format!("every {key} entry must carry a numeric id"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Err(NetworkApiError::invalid_parameter(format!("{key} was not informed.")));
        }
        let uri = format!("{}{}/", path, join_ids(&ids));
        self.put(&uri, &json!({ key: items })).await
    }

    /// DELETE `path{ids}/`
    pub async fn delete_many(&self, path: &str, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        let uri = format!("{}{}/", path, join_ids(&ids));
        self.delete(&uri).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[test]
    fn test_response_success() {
        let raw = RawResponse::new(200, r#"{"vlans": [{"id": 1}]}"#);
        assert_eq!(ApiClient::response(&raw).unwrap(), json!({ "vlans": [{ "id": 1 }] }));
        assert_eq!(ApiClient::response(&RawResponse::new(204, "")).unwrap(), Value::Null);
    }

    #[test]
    fn test_response_detail() {
        let raw = RawResponse::new(400, r#"{"detail": "Vlan 3 do not exist."}"#);
        match ApiClient::response(&raw) {
            Err(NetworkApiError::Client { status, detail }) => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Vlan 3 do not exist.");
            }
            other => panic!("expected Client error, got {other:?}"),
        }
    }

    #[test]
    fn test_response_non_json_error() {
        let raw = RawResponse::new(502, "Bad Gateway");
        assert!(matches!(
            ApiClient::response(&raw),
            Err(NetworkApiError::Client { status: 502, detail }) if detail == "Bad Gateway"
        ));
    }

    #[tokio::test]
    async fn test_empty_id_list_never_sent() {
        let mock = MockTransport::new();
        let client = ApiClient::new("http://napi.test", Arc::new(mock.clone()));

        let err = client
            .get_by_ids("api/v3/vlan/", &[], &QueryOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(client.delete_many("api/v3/vlan/", &[]).await.unwrap_err().is_invalid_parameter());
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_by_ids_joins_with_semicolons() {
        let mock = MockTransport::new();
        mock.push_json(200, &json!({ "vlans": [] }));
        let client = ApiClient::new("http://napi.test", Arc::new(mock.clone()));

        client
            .get_by_ids("api/v3/vlan/", &[3, 4], &QueryOptions::default())
            .await
            .unwrap();
        assert_eq!(mock.last_request().unwrap().url, "http://napi.test/api/v3/vlan/3;4/");
    }
}
