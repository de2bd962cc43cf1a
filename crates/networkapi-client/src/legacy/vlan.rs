//! Vlan resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::{Pagination, narrow};
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// IP version selector used by vlan and network operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IpVersion {
    /// IPv4
    #[serde(rename = "v4")]
    V4,
    /// IPv6
    #[serde(rename = "v6")]
    V6,
}

impl IpVersion {
    /// Wire name (`v4`/`v6`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::V4 => "v4",
            Self::V6 => "v6",
        }
    }
}

/// Fields of a vlan insert (with explicit number) or edit
#[derive(Debug, Clone, Default, Serialize)]
pub struct VlanRequest {
    /// Environment id
    pub environment_id: u64,
    /// Vlan name
    pub name: String,
    /// Vlan number
    pub number: u32,
    /// Description
    pub description: Option<String>,
    /// IPv4 ACL file name
    pub acl_file: Option<String>,
    /// IPv6 ACL file name
    pub acl_file_v6: Option<String>,
    /// Create an IPv4 network along with the vlan
    pub network_ipv4: bool,
    /// Create an IPv6 network along with the vlan
    pub network_ipv6: bool,
    /// VRF name
    pub vrf: Option<String>,
}

/// Search filters of [`Vlan::find`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct VlanSearch {
    /// Vlan number
    #[serde(rename = "numero")]
    pub number: Option<u32>,
    /// Vlan name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Match the name exactly
    #[serde(rename = "exato")]
    pub iexact: bool,
    /// Environment id
    #[serde(rename = "ambiente")]
    pub environment: Option<u64>,
    /// Network type id
    #[serde(rename = "tipo_rede")]
    pub net_type: Option<u64>,
    /// Network address (`10.0.0.0/24`)
    #[serde(rename = "rede")]
    pub network: Option<String>,
    /// IP version: 0 = IPv4, 1 = IPv6, 2 = both
    #[serde(rename = "versao")]
    pub ip_version: u8,
    /// Match subnets of `network`
    #[serde(rename = "subrede")]
    pub subnet: bool,
    /// Only vlans with ACL
    pub acl: bool,
}

/// Vlan façade
#[derive(Debug, Clone)]
pub struct Vlan {
    client: GenericClient,
}

impl Vlan {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Get one vlan
    pub async fn get(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        narrow(self.client.get(&format!("vlan/{id}/"), &[]).await?, "vlan")
    }

    /// Get one vlan with its IPv4/IPv6 networks
    pub async fn get_with_networks(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        let response = self
            .client
            .get(&format!("vlan/{id}/network/"), &["vlan/redeipv4", "vlan/redeipv6"])
            .await?;
        narrow(response, "vlan")
    }

    /// List the vlans of an environment
    pub async fn list_by_environment(&self, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_environment, "Environment id")?;
        self.client.get(&format!("vlan/ambiente/{id}/"), &["vlan"]).await
    }

    /// Search vlans with pagination
    pub async fn find(&self, search: &VlanSearch, pagination: &Pagination) -> Result<Value, NetworkApiError> {
        let mut map = match serde_json::to_value(search)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        pagination.apply(&mut map)?;
        let payload = json!({ "vlan": map });
        self.client
            .post(
                "vlan/find/",
                &payload,
                &["vlan", "vlan/redeipv4", "vlan/redeipv6", "vlan/equipamentos"],
            )
            .await
    }

    /// Allocate a vlan with the next free number and an IPv4 network
    pub async fn allocate(
        &self,
        name: &str,
        id_network_type: impl IdParam,
        id_environment: impl IdParam,
        description: Option<&str>,
        id_environment_vip: Option<u64>,
        vrf: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        require_text(name, "Vlan name")?;
        let id_network_type = require_id(&id_network_type, "Network type id")?;
        let id_environment = require_id(&id_environment, "Environment id")?;
        let payload = json!({
            "vlan": {
                "nome": name,
                "id_tipo_rede": id_network_type,
                "id_ambiente": id_environment,
                "descricao": description,
                "id_ambiente_vip": id_environment_vip,
                "vrf": vrf,
            }
        });
        narrow(self.client.post("vlan/", &payload, &[]).await?, "vlan")
    }

    /// Allocate a vlan with the next free number and no network
    pub async fn allocate_without_network(
        &self,
        id_environment: impl IdParam,
        name: &str,
        description: Option<&str>,
        vrf: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        require_text(name, "Vlan name")?;
        let payload = json!({
            "vlan": {
                "environment_id": id_environment,
                "name": name,
                "description": description,
                "vrf": vrf,
            }
        });
        narrow(self.client.post("vlan/no-network/", &payload, &[]).await?, "vlan")
    }

    /// Insert a vlan with an explicit number
    pub async fn insert(&self, request: &VlanRequest) -> Result<Value, NetworkApiError> {
        require_text(&request.name, "Vlan name")?;
        let payload = json!({ "vlan": request });
        narrow(self.client.post("vlan/insert/", &payload, &[]).await?, "vlan")
    }

    /// Edit a vlan
    pub async fn edit(&self, id_vlan: impl IdParam, request: &VlanRequest) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        let mut payload = json!({ "vlan": request });
        payload["vlan"]["vlan_id"] = json!(id);
        self.client.post("vlan/edit/", &payload, &[]).await
    }

    /// Check whether a vlan number is free in an environment
    ///
    /// `id_vlan` excludes an existing vlan from the check (0 for none).
    pub async fn check_number_available(
        &self,
        id_environment: impl IdParam,
        number: u32,
        id_vlan: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        let id_vlan = require_id(&id_vlan, "Vlan id")?;
        self.client
            .get(&format!("vlan/check_number_available/{id_environment}/{number}/{id_vlan}/"), &[])
            .await
    }

    /// Confirm a vlan number/network against the environment's rules
    pub async fn confirm(
        &self,
        number_net: &str,
        id_environment_vlan: impl IdParam,
        ip_version: Option<IpVersion>,
    ) -> Result<Value, NetworkApiError> {
        require_text(number_net, "Vlan number or network")?;
        let id_environment = require_id(&id_environment_vlan, "Environment id")?;
        let version = ip_version.map_or("None", IpVersion::as_str);
        self.client
            .get(&format!("vlan/confirm/{}/{}/{}", segment(number_net), id_environment, version), &[])
            .await
    }

    /// Create the vlan on its equipment
    pub async fn create_vlan(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        let payload = json!({ "vlan": { "vlan_id": id } });
        self.client.put("vlan/create/", &payload, &[]).await
    }

    /// Create the vlan and its IPv4 network on the equipment
    pub async fn create_ipv4(&self, id_network_ipv4: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network_ipv4, "Network IPv4 id")?;
        let payload = json!({ "vlan": { "id_network_ip": id } });
        self.client.post("vlan/v4/create/", &payload, &[]).await
    }

    /// Create the vlan and its IPv6 network on the equipment
    pub async fn create_ipv6(&self, id_network_ipv6: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network_ipv6, "Network IPv6 id")?;
        let payload = json!({ "vlan": { "id_network_ip": id } });
        self.client.post("vlan/v6/create/", &payload, &[]).await
    }

    /// Mark the vlan's ACL as validated for one IP version
    pub async fn validate(&self, id_vlan: impl IdParam, ip_version: IpVersion) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        self.client
            .request(
                HttpMethod::Put,
                &format!("vlan/{}/validate/{}/", id, ip_version.as_str()),
                None,
                &[],
            )
            .await
    }

    /// Remove the vlan from its equipment (keeps it registered)
    pub async fn remove(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        self.client.delete(&format!("vlan/{id}/remove/")).await
    }

    /// Deallocate the vlan and its networks
    pub async fn deallocate(&self, id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        self.client.delete(&format!("vlan/{id}/deallocate/")).await
    }

    /// Check whether the vlan is allowed on an equipment interface
    pub async fn check_permission(
        &self,
        id_vlan: impl IdParam,
        equipment_name: &str,
        interface_name: &str,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vlan, "Vlan id")?;
        require_text(equipment_name, "Equipment name")?;
        require_text(interface_name, "Interface name")?;
        let payload = json!({
            "equipamento": {
                "nome": equipment_name,
                "nome_interface": interface_name,
            }
        });
        narrow(self.client.put(&format!("vlan/{id}/check/"), &payload, &[]).await?, "sucesso")
    }
}
