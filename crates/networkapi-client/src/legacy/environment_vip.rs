//! Environment vips and the vip options attached to them

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// Fields of an environment vip insert/edit
///
/// An environment vip is keyed by its finality, client and P44 environment names.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnvironmentVipRequest {
    /// Finality
    pub finalidade_txt: String,
    /// Client
    pub cliente_txt: String,
    /// P44 environment
    pub ambiente_p44_txt: String,
    /// Free-text description
    pub description: String,
}

/// Environment vip façade
#[derive(Debug, Clone)]
pub struct EnvironmentVip {
    client: GenericClient,
}

impl EnvironmentVip {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every environment vip
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("environmentvip/all/", &["environment_vip"])
            .await
    }

    /// List the environment vips available to an equipment's networks
    pub async fn list_available(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        self.client
            .get(&format!("environmentvip/list/vlan/{id}/"), &["environment_vip"])
            .await
    }

    /// Find an environment vip by id or by finality/client/P44 environment
    pub async fn search(
        &self,
        id_environment_vip: Option<u64>,
        finality: Option<&str>,
        client: Option<&str>,
        environment_p44: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "environment_vip": {
                "id_environment_vip": id_environment_vip,
                "finalidade_txt": finality,
                "cliente_txt": client,
                "ambiente_p44_txt": environment_p44,
            }
        });
        narrow(
            self.client.post("environmentvip/search/", &payload, &[]).await?,
            "environment_vip",
        )
    }

    /// Insert an environment vip, returning its new id
    pub async fn add(&self, request: &EnvironmentVipRequest) -> Result<Value, NetworkApiError> {
        validate(request)?;
        let payload = json!({ "environment_vip": request });
        narrow(
            self.client.post("environmentvip/", &payload, &[]).await?,
            "environment_vip",
        )
    }

    /// Edit an environment vip
    pub async fn alter(&self, id_environment_vip: impl IdParam, request: &EnvironmentVipRequest) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        validate(request)?;
        let payload = json!({ "environment_vip": request });
        self.client.put(&format!("environmentvip/{id}/"), &payload, &[]).await
    }

    /// Remove an environment vip
    pub async fn remove(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client.delete(&format!("environmentvip/{id}/")).await
    }

    /// List every finality in use
    pub async fn get_finalities(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("environment-vip/get/finality/", &["finalidade"])
            .await
    }

    /// List the clients registered under a finality
    pub async fn get_clients_by_finality(&self, finality: &str) -> Result<Value, NetworkApiError> {
        require_text(finality, "Finality")?;
        let payload = json!({ "vip": { "finalidade": finality } });
        self.client
            .post("environment-vip/get/cliente_txt/", &payload, &["cliente_txt"])
            .await
    }

    /// List the P44 environments registered under a finality and client
    pub async fn get_p44_by_finality_and_client(&self, finality: &str, client: &str) -> Result<Value, NetworkApiError> {
        require_text(finality, "Finality")?;
        require_text(client, "Client")?;
        let payload = json!({ "vip": { "finalidade": finality, "cliente_txt": client } });
        self.client
            .post("environment-vip/get/ambiente_p44_txt/", &payload, &["ambiente_p44"])
            .await
    }

    /// List the vip timeouts configured for an environment vip
    pub async fn get_timeouts(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "timeout").await
    }

    /// List the cache groups configured for an environment vip
    pub async fn get_cache_groups(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "grupo-cache").await
    }

    /// List the persistence options configured for an environment vip
    pub async fn get_persistences(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "persistencia").await
    }

    /// List the balancing methods configured for an environment vip
    pub async fn get_balancing(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "balanceamento").await
    }

    /// List the healthchecks configured for an environment vip
    pub async fn get_healthchecks(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "healthcheck").await
    }

    /// List the routes configured for an environment vip
    pub async fn get_routes(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        self.option_lookup(id_environment_vip, "rotas").await
    }

    async fn option_lookup(&self, id_environment_vip: impl IdParam, option: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        let path = format!("environment-vip/get/{option}/{id}/");
        self.client.get(&path, &["opcoesvip"]).await
    }
}

fn validate(request: &EnvironmentVipRequest) -> Result<(), NetworkApiError> {
    require_text(&request.finalidade_txt, "Finality")?;
    require_text(&request.cliente_txt, "Client")?;
    require_text(&request.ambiente_p44_txt, "P44 environment")?;
    Ok(())
}

/// Vip option (`opcoesvip`) façade
#[derive(Debug, Clone)]
pub struct OptionVip {
    client: GenericClient,
}

impl OptionVip {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every vip option
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("optionvip/all/", &["option_vip"]).await
    }

    /// Get one vip option
    pub async fn get(&self, id_option_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_option_vip, "Option VIP id")?;
        narrow(self.client.get(&format!("optionvip/{id}/"), &[]).await?, "option_vip")
    }

    /// Insert a vip option, returning its new id
    pub async fn add(&self, option_type: &str, name: &str) -> Result<Value, NetworkApiError> {
        require_text(option_type, "Option type")?;
        require_text(name, "Option name")?;
        let payload = json!({ "option_vip": { "tipo_opcao": option_type, "nome_opcao_txt": name } });
        narrow(self.client.post("optionvip/", &payload, &[]).await?, "option_vip")
    }

    /// Edit a vip option
    pub async fn alter(&self, id_option_vip: impl IdParam, option_type: &str, name: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_option_vip, "Option VIP id")?;
        require_text(option_type, "Option type")?;
        require_text(name, "Option name")?;
        let payload = json!({ "option_vip": { "tipo_opcao": option_type, "nome_opcao_txt": name } });
        self.client.put(&format!("optionvip/{id}/"), &payload, &[]).await
    }

    /// Remove a vip option
    pub async fn remove(&self, id_option_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_option_vip, "Option VIP id")?;
        self.client.delete(&format!("optionvip/{id}/")).await
    }

    /// Make a vip option available to an environment vip
    pub async fn associate(&self, id_option_vip: impl IdParam, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_option = require_id(&id_option_vip, "Option VIP id")?;
        let id_evip = require_id(&id_environment_vip, "Environment VIP id")?;
        let response = self
            .client
            .request(
                HttpMethod::Put,
                &format!("optionvip/{id_option}/environmentvip/{id_evip}/"),
                None,
                &[],
            )
            .await?;
        narrow(response, "opcoesvip_ambiente_xref")
    }

    /// Withdraw a vip option from an environment vip
    pub async fn disassociate(&self, id_option_vip: impl IdParam, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_option = require_id(&id_option_vip, "Option VIP id")?;
        let id_evip = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client
            .delete(&format!("optionvip/{id_option}/environmentvip/{id_evip}/"))
            .await
    }

    /// List the vip options available to an environment vip
    pub async fn list_by_environment_vip(&self, id_environment_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client
            .get(&format!("optionvip/environmentvip/{id}/"), &["option_vip"])
            .await
    }

    /// List the vip options of one type available to an environment vip
    pub async fn list_by_type(&self, id_environment_vip: impl IdParam, option_type: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        require_text(option_type, "Option type")?;
        let path = format!("optionvip/environmentvip/{}/type/{}/", id, segment(option_type));
        self.client.get(&path, &["option_vip"]).await
    }
}
