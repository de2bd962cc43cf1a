//! Network (`rede`) resources

use super::vlan::IpVersion;
use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_ids, require_text};
use serde_json::{Value, json};

/// Network façade
#[derive(Debug, Clone)]
pub struct Network {
    client: GenericClient,
}

impl Network {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Add a network with an explicit address (`10.0.0.0/24`) to a vlan
    pub async fn add_network(
        &self,
        network: &str,
        id_vlan: impl IdParam,
        id_network_type: impl IdParam,
        id_environment_vip: Option<u64>,
        cluster_unit: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        require_text(network, "Network")?;
        let payload = json!({
            "network": {
                "network": network,
                "id_vlan": require_id(&id_vlan, "Vlan id")?,
                "id_network_type": require_id(&id_network_type, "Network type id")?,
                "id_environment_vip": id_environment_vip,
                "cluster_unit": cluster_unit,
            }
        });
        narrow(self.client.post("network/add/", &payload, &[]).await?, "network")
    }

    /// Create the given networks on their equipment
    pub async fn create_networks(&self, ids: &[u64], id_vlan: impl IdParam) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Network ids")?;
        let payload = json!({
            "network": {
                "ids": ids,
                "id_vlan": require_id(&id_vlan, "Vlan id")?,
            }
        });
        self.client.put("network/create/", &payload, &[]).await
    }

    /// Allocate the next free IPv4 network of a vlan's environment
    pub async fn add_network_ipv4(
        &self,
        id_vlan: impl IdParam,
        id_network_type: Option<u64>,
        id_environment_vip: Option<u64>,
        prefix: Option<u8>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "vlan": {
                "id_vlan": require_id(&id_vlan, "Vlan id")?,
                "id_tipo_rede": id_network_type,
                "id_ambiente_vip": id_environment_vip,
                "prefix": prefix,
            }
        });
        self.client.post("network/ipv4/add/", &payload, &[]).await
    }

    /// Allocate the next free IPv6 network of a vlan's environment
    pub async fn add_network_ipv6(
        &self,
        id_vlan: impl IdParam,
        id_network_type: Option<u64>,
        id_environment_vip: Option<u64>,
        prefix: Option<u8>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "vlan": {
                "id_vlan": require_id(&id_vlan, "Vlan id")?,
                "id_tipo_rede": id_network_type,
                "id_ambiente_vip": id_environment_vip,
                "prefix": prefix,
            }
        });
        self.client.post("network/ipv6/add/", &payload, &[]).await
    }

    /// Get an IPv4 network
    pub async fn get_network_ipv4(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        narrow(self.client.get(&format!("network/ipv4/id/{id}/"), &[]).await?, "network")
    }

    /// Get an IPv6 network
    pub async fn get_network_ipv6(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        narrow(self.client.get(&format!("network/ipv6/id/{id}/"), &[]).await?, "network")
    }

    /// Change the type or environment vip of a network
    pub async fn edit_network(
        &self,
        id_network: impl IdParam,
        ip_version: IpVersion,
        id_network_type: impl IdParam,
        id_environment_vip: Option<u64>,
        cluster_unit: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "net": {
                "id_net": require_id(&id_network, "Network id")?,
                "id_net_type": require_id(&id_network_type, "Network type id")?,
                "id_vip_env": id_environment_vip,
                "ip_type": ip_version.as_str(),
                "cluster_unit": cluster_unit,
            }
        });
        self.client.post("network/edit/", &payload, &[]).await
    }

    /// Deallocate an IPv4 network and its addresses
    pub async fn deallocate_network_ipv4(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        self.client.delete(&format!("network/ipv4/{id}/deallocate/")).await
    }

    /// Deallocate an IPv6 network and its addresses
    pub async fn deallocate_network_ipv6(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        self.client.delete(&format!("network/ipv6/{id}/deallocate/")).await
    }

    /// Remove the given networks from their equipment
    pub async fn remove_networks(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        let ids = require_ids(ids, "Network ids")?;
        let payload = json!({ "network": { "ids": ids } });
        self.client.put("network/remove/", &payload, &[]).await
    }
}
