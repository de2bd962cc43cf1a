//! Environment (`ambiente`) resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_ipv4, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// Fields of an environment insert/update
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnvironmentRequest {
    /// L3 group id
    #[serde(rename = "id_grupo_l3")]
    pub l3_group_id: u64,
    /// Logical environment id
    #[serde(rename = "id_ambiente_logico")]
    pub logical_environment_id: u64,
    /// Datacenter division id
    #[serde(rename = "id_divisao")]
    pub dc_division_id: u64,
    /// Link to the environment documentation
    pub link: Option<String>,
    /// Filter id
    pub id_filter: Option<u64>,
    /// ACL file path
    pub acl_path: Option<String>,
    /// IPv4 configuration template
    pub ipv4_template: Option<String>,
    /// IPv6 configuration template
    pub ipv6_template: Option<String>,
    /// First vlan number of range 1
    pub min_num_vlan_1: Option<u32>,
    /// Last vlan number of range 1
    pub max_num_vlan_1: Option<u32>,
    /// First vlan number of range 2
    pub min_num_vlan_2: Option<u32>,
    /// Last vlan number of range 2
    pub max_num_vlan_2: Option<u32>,
    /// VRF name
    pub vrf: Option<String>,
}

/// Environment façade
#[derive(Debug, Clone)]
pub struct Environment {
    client: GenericClient,
}

impl Environment {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every environment with its L3 group, logical environment and DC division names
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client.get("ambiente/all/", &["ambiente"]).await
    }

    /// List every environment with its full name
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("ambiente/list/", &["ambiente"]).await
    }

    /// List the environments an equipment belongs to
    pub async fn list_by_equipment(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client.get(&format!("ambiente/equip/{id}/"), &["ambiente"]).await
    }

    /// Find the environment holding `ip` on the named equipment
    pub async fn search_by_equipment_ip(
        &self,
        equipment_name: &str,
        ip: &str,
    ) -> Result<Value, NetworkApiError> {
        require_text(equipment_name, "Equipment name")?;
        require_ipv4(ip, "IP")?;
        let path = format!("ambiente/equipamento/{}/ip/{}/", segment(equipment_name), ip);
        narrow(self.client.get(&path, &[]).await?, "ambiente")
    }

    /// Get one environment
    ///
    /// # Returns
    /// * `Ok(Value)` - The `ambiente` mapping
    /// * `Err(NetworkApiError)` - If the id is invalid or the environment does not exist
    pub async fn get_by_id(&self, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        narrow(self.client.get(&format!("environment/id/{id}/"), &[]).await?, "ambiente")
    }

    /// Insert an environment, returning its new id
    pub async fn insert(&self, request: &EnvironmentRequest) -> Result<Value, NetworkApiError> {
        let payload = json!({ "ambiente": request });
        narrow(self.client.post("ambiente/", &payload, &[]).await?, "ambiente")
    }

    /// Update an environment
    pub async fn update(
        &self,
        id_environment: impl IdParam,
        request: &EnvironmentRequest,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        let payload = json!({ "ambiente": request });
        self.client.put(&format!("ambiente/{id}/"), &payload, &[]).await
    }

    /// Remove an environment
    pub async fn remove(&self, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        self.client.delete(&format!("ambiente/{id}/")).await
    }

    /// Register a network range the environment may allocate from
    pub async fn configuration_save(
        &self,
        id_environment: impl IdParam,
        network: &str,
        prefix: u8,
        ip_version: &str,
        id_network_type: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        let id_network_type = require_id(&id_network_type, "Network type id")?;
        require_text(network, "Network")?;
        let payload = json!({
            "ambiente": {
                "id_environment": id_environment,
                "network": network,
                "prefix": prefix,
                "ip_version": ip_version,
                "network_type": id_network_type,
            }
        });
        self.client.post("environment/configuration/save/", &payload, &[]).await
    }

    /// List the network ranges configured for an environment
    pub async fn configuration_list_all(&self, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        self.client
            .get(&format!("environment/configuration/list/{id}/"), &["lists_configuration"])
            .await
    }

    /// Remove a network range from an environment
    pub async fn configuration_remove(
        &self,
        id_environment: impl IdParam,
        id_configuration: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        let id_configuration = require_id(&id_configuration, "Configuration id")?;
        self.client
            .delete(&format!("environment/configuration/remove/{id_environment}/{id_configuration}/"))
            .await
    }

    /// List the environments related to an environment vip
    pub async fn get_related_environment_list(
        &self,
        id_environment_vip: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment_vip, "Environment VIP id")?;
        self.client
            .get(&format!("environment/environmentvip/{id}/"), &["environment_related_list"])
            .await
    }

    /// Point an environment at a named configuration template
    pub async fn set_template(
        &self,
        id_environment: impl IdParam,
        name: &str,
        network: &str,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        let payload = json!({ "environment": { "name": name, "network": network } });
        self.client
            .post(&format!("environment/set_template/{id}/"), &payload, &[])
            .await
    }

    /// List the healthcheck expects of an environment
    pub async fn list_healthcheck_expect(&self, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        self.client
            .get(&format!("healthcheckexpect/ambiente/{id}/"), &["healthcheck_expect"])
            .await
    }

    /// Add a healthcheck expect to an environment
    pub async fn add_healthcheck_expect(
        &self,
        id_environment: impl IdParam,
        expect_string: &str,
        match_list: &str,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        let payload = json!({
            "healthcheck": {
                "id_ambiente": id,
                "expect_string": expect_string,
                "match_list": match_list,
            }
        });
        self.client.post("healthcheckexpect/add/", &payload, &[]).await
    }
}
