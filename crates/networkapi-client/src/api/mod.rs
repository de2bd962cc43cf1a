//! v3/v4 JSON resources
//!
//! Each resource family lives under one path and wraps its entities under one
//! key (`{"vlans": [...]}`). [`ApiResource`] supplies the shared search, get,
//! create, update and delete operations from those two constants; the family
//! types add their own extras (deploy, option lookups, connections).

use crate::common::ApiClient;
use crate::common::query::join_ids;
use crate::error::NetworkApiError;
use crate::models::QueryOptions;
use crate::validation::require_ids;
use async_trait::async_trait;
use serde_json::Value;

/// Declare a resource façade over [`ApiClient`] bound to a path and key
macro_rules! api_resource {
    ($(#[$doc:meta])* $name:ident, $path:literal, $key:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: $crate::common::ApiClient,
        }

        impl $name {
            /// Create the façade over a shared client
            pub fn new(client: $crate::common::ApiClient) -> Self {
                Self { client }
            }
        }

        impl $crate::api::ApiResource for $name {
            const PATH: &'static str = $path;
            const KEY: &'static str = $key;

            fn client(&self) -> &$crate::common::ApiClient {
                &self.client
            }
        }
    };
}

pub(crate) use api_resource;

pub mod environment;
pub mod equipment;
pub mod ip;
pub mod network;
pub mod permission;
pub mod vip;
pub mod vlan;

pub use environment::{ApiEnvironment, ApiEnvironmentVip};
pub use equipment::{ApiAsn, ApiEquipment, ApiInterface};
pub use ip::{ApiIpv4, ApiIpv6};
pub use network::{ApiNetworkIpv4, ApiNetworkIpv6};
pub use permission::ApiObjectGroupPermission;
pub use vip::{ApiPool, ApiVipRequest};
pub use vlan::ApiVlan;

/// Shared operations of a v3/v4 resource family
#[async_trait]
pub trait ApiResource: Send + Sync {
    /// Collection path, with trailing slash (`api/v3/vlan/`)
    const PATH: &'static str;

    /// Key wrapping the entities in requests and responses (`vlans`)
    const KEY: &'static str;

    /// The JSON client requests go through
    fn client(&self) -> &ApiClient;

    /// Search the collection
    async fn search(&self, options: &QueryOptions) -> Result<Value, NetworkApiError> {
        self.client().search(Self::PATH, options).await
    }

    /// Get entities by id
    async fn get(&self, ids: &[u64], options: &QueryOptions) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        self.client().get_by_ids(Self::PATH, &ids, options).await
    }

    /// Create entities, returning their ids
    async fn create(&self, items: &[Value]) -> Result<Value, NetworkApiError> {
        if items.is_empty() {
            return Err(NetworkApiError::invalid_parameter(format!("{} was not informed.", Self::KEY)));
        }
        self.client().create_many(Self::PATH, Self::KEY, items).await
    }

    /// Update entities; each item carries its own `id`
    async fn update(&self, items: &[Value]) -> Result<Value, NetworkApiError> {
        self.client().update_many(Self::PATH, Self::KEY, items).await
    }

    /// Delete entities by id
    async fn delete(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        self.client().delete_many(Self::PATH, &ids).await
    }
}

/// Resources whose entities are pushed to (and withdrawn from) the equipment
#[async_trait]
pub trait Deployable: ApiResource {
    /// Deploy path, with trailing slash (`api/v3/pool/deploy/`)
    const DEPLOY_PATH: &'static str;

    /// Apply the entities on their equipment
    async fn deploy(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        let uri = format!("{}{}/", Self::DEPLOY_PATH, join_ids(&ids));
        self.client().post_empty(&uri).await
    }

    /// Withdraw the entities from their equipment
    async fn undeploy(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        self.client().delete_many(Self::DEPLOY_PATH, &ids).await
    }

    /// Update entities that are already deployed and push the change
    async fn update_deployed(&self, items: &[Value]) -> Result<Value, NetworkApiError> {
        self.client().update_many(Self::DEPLOY_PATH, Self::KEY, items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    api_resource!(
        /// Resource used to exercise the shared operations
        Widget, "api/v3/widget/", "widgets"
    );

    fn widget(mock: &MockTransport) -> Widget {
        Widget::new(ApiClient::new("http://napi.test", Arc::new(mock.clone())))
    }

    #[tokio::test]
    async fn test_get_joins_ids() {
        let mock = MockTransport::new();
        mock.push_json(200, &json!({ "widgets": [] }));

        widget(&mock).get(&[1, 2], &QueryOptions::default()).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "http://napi.test/api/v3/widget/1;2/");
    }

    #[tokio::test]
    async fn test_update_takes_ids_from_items() {
        let mock = MockTransport::new();
        mock.push_json(200, &json!([{ "id": 4 }]));

        let items = [json!({ "id": 4, "name": "a" }), json!({ "id": 9, "name": "b" })];
        widget(&mock).update(&items).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.url, "http://napi.test/api/v3/widget/4;9/");
        let body: Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["widgets"][1]["name"], "b");
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_locally() {
        let mock = MockTransport::new();
        let resource = widget(&mock);

        assert!(resource.create(&[]).await.unwrap_err().is_invalid_parameter());
        assert!(resource.delete(&[]).await.unwrap_err().is_invalid_parameter());
        assert!(resource.update(&[json!({ "name": "no id" })]).await.unwrap_err().is_invalid_parameter());
        assert_eq!(mock.call_count(), 0);
    }
}
