//! Environment and environment-vip resources

use super::{ApiResource, api_resource};
use crate::common::query::build_query_string;
use crate::error::NetworkApiError;
use crate::validation::{IdParam, require_id};
use serde_json::Value;

api_resource!(
    /// `api/v3/environment/`
    ApiEnvironment, "api/v3/environment/", "environments"
);

impl ApiEnvironment {
    /// Environments that may hold networks of an environment vip
    pub async fn list_by_environment_vip(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client()
            .get(&format!("{}environment-vip/{}/", Self::PATH, id))
            .await
    }
}

api_resource!(
    /// `api/v3/environment-vip/`
    ApiEnvironmentVip, "api/v3/environment-vip/", "environments_vip"
);

impl ApiEnvironmentVip {
    /// Walk the finality → client → P44 environment tree one step
    ///
    /// With no argument the finalities are listed; each further argument narrows
    /// the next level down.
    pub async fn step(
        &self,
        finality: Option<&str>,
        client: Option<&str>,
        environment_p44: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let params: Vec<(&str, String)> = [
            ("finality", finality),
            ("client", client),
            ("environmentp44", environment_p44),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value.to_string())))
        .collect();
        let uri = if params.is_empty() {
            format!("{}step/", Self::PATH)
        } else {
            format!("{}step/?{}", Self::PATH, build_query_string(&params))
        };
        self.client().get(&uri).await
    }

    /// Vip options available to an environment vip
    pub async fn options(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client()
            .get(&format!("api/v3/option-vip/environment-vip/{id}/"))
            .await
    }

    /// Vip options of one type available to an environment vip
    pub async fn options_by_type(
        &self,
        id_environment_vip: impl IdParam,
        option_type: &str,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        let params = [("type", option_type.to_string())];
        self.client()
            .get(&format!(
                "api/v3/type-option/environment-vip/{}/?{}",
                id,
                build_query_string(&params)
            ))
            .await
    }

    /// Pool options (balancing, healthcheck, servicedownaction) of an environment
    pub async fn pool_options(&self, id_environment: impl IdParam, option_type: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        let params = [("type", option_type.to_string())];
        self.client()
            .get(&format!(
                "api/v3/option-pool/environment/{}/?{}",
                id,
                build_query_string(&params)
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ApiClient;
    use crate::mock::MockTransport;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_step_skips_missing_levels() {
        let mock = MockTransport::new();
        mock.push_json(200, &json!([{ "finalidade_txt": "Producao" }]));
        mock.push_json(200, &json!([]));

        let resource = ApiEnvironmentVip::new(ApiClient::new("http://napi.test", Arc::new(mock.clone())));
        resource.step(None, None, None).await.unwrap();
        resource.step(Some("Producao"), Some("Banco"), None).await.unwrap();

        let urls: Vec<String> = mock.requests().into_iter().map(|request| request.url).collect();
        assert_eq!(urls[0], "http://napi.test/api/v3/environment-vip/step/");
        assert_eq!(
            urls[1],
            "http://napi.test/api/v3/environment-vip/step/?finality=Producao&client=Banco"
        );
    }
}
