//! Server pool and vip request resources

use super::{ApiResource, Deployable, api_resource};
use crate::common::query::join_ids;
use crate::error::NetworkApiError;
use crate::validation::{IdParam, require_id, require_ids};
use serde_json::Value;

api_resource!(
    /// `api/v3/pool/`
    ApiPool, "api/v3/pool/", "server_pools"
);

impl Deployable for ApiPool {
    const DEPLOY_PATH: &'static str = "api/v3/pool/deploy/";
}

impl ApiPool {
    /// Pools usable by an environment vip
    pub async fn list_by_environment_vip(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client()
            .get(&format!("{}environment-vip/{}/", Self::PATH, id))
            .await
    }

    /// Real-time member status, read from the load balancer
    pub async fn member_status(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Identifiers")?;
        let uri = format!("{}{}/member/status/?checkstatus=1", Self::PATH, join_ids(&ids));
        self.client().get(&uri).await
    }
}

api_resource!(
    /// `api/v3/vip-request/`
    ApiVipRequest, "api/v3/vip-request/", "vips"
);

impl Deployable for ApiVipRequest {
    const DEPLOY_PATH: &'static str = "api/v3/vip-request/deploy/";
}

impl ApiVipRequest {
    /// Vip requests that use a pool
    pub async fn list_by_pool(&self, id_pool: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_pool, "Pool id")?;
        self.client()
            .get(&format!("{}pool/{}/", Self::PATH, id))
            .await
    }
}
