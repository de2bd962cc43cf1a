//! Mock transport for unit testing
//!
//! This module provides a mock implementation of [`Transport`] that can be used
//! in tests without a running NetworkAPI instance. Responses are queued up front and
//! every request is recorded, so tests can assert both what was sent and that nothing
//! was sent at all.

use crate::error::NetworkApiError;
use crate::transport::{ApiRequest, RawResponse, Transport};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Mock transport for testing
///
/// Clones share the same queue and request log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<RawResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    /// Create a mock with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response (for test setup)
    pub fn push_response(&self, status: u16, body: impl Into<String>) -> &Self {
        lock(&self.responses).push_back(RawResponse::new(status, body));
        self
    }

    /// Queue a 200 response wrapping `inner` in the legacy `<networkapi>` root
    pub fn push_xml(&self, inner: &str) -> &Self {
        self.push_response(
            200,
            format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\">{inner}</networkapi>"),
        )
    }

    /// Queue a legacy error response carrying `<erro>` code and description
    pub fn push_xml_error(&self, code: u32, description: &str) -> &Self {
        self.push_response(
            500,
            format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\"><erro><codigo>{code:04}</codigo><descricao>{description}</descricao></erro></networkapi>"
            ),
        )
    }

    /// Queue a JSON response
    pub fn push_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.push_response(status, body.to_string())
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<ApiRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// The most recent request
    pub fn last_request(&self) -> Option<ApiRequest> {
        lock(&self.requests).last().cloned()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, NetworkApiError> {
        let url = request.url.clone();
        lock(&self.requests).push(request);
        lock(&self.responses).pop_front().ok_or_else(|| NetworkApiError::Client {
            status: 599,
            detail: format!("MockTransport has no queued response for {url}"),
        })
    }
}
