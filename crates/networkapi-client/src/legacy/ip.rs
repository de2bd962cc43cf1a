//! IP address resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_ipv4, require_text};
use serde_json::{Value, json};

/// IP façade
#[derive(Debug, Clone)]
pub struct Ip {
    client: GenericClient,
}

impl Ip {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Next free IPv4 address of a network
    pub async fn get_available_ip4(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        narrow(self.client.get(&format!("ip/availableip4/{id}/"), &[]).await?, "ip")
    }

    /// Next free IPv6 address of a network
    pub async fn get_available_ip6(&self, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_network, "Network id")?;
        narrow(self.client.get(&format!("ip/availableip6/{id}/"), &[]).await?, "ip6")
    }

    /// Get an IPv4 address with its equipment
    pub async fn get_ipv4(&self, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_ip, "IPv4 id")?;
        narrow(self.client.get(&format!("ip/get-ipv4/{id}/"), &["ipv4/equipamentos"]).await?, "ipv4")
    }

    /// Get an IPv6 address with its equipment
    pub async fn get_ipv6(&self, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_ip, "IPv6 id")?;
        narrow(self.client.get(&format!("ip/get-ipv6/{id}/"), &["ipv6/equipamentos"]).await?, "ipv6")
    }

    /// Find an IPv4 address within an environment
    pub async fn search_by_ip_environment(&self, ip: &str, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        require_ipv4(ip, "IP")?;
        let id_environment = require_id(&id_environment, "Environment id")?;
        narrow(
            self.client.get(&format!("ip/{ip}/ambiente/{id_environment}/"), &[]).await?,
            "ip",
        )
    }

    /// Find an IPv6 address within an environment
    pub async fn search_ipv6_environment(&self, ipv6: &str, id_environment: impl IdParam) -> Result<Value, NetworkApiError> {
        require_text(ipv6, "IPv6")?;
        let id_environment = require_id(&id_environment, "Environment id")?;
        let payload = json!({ "ipv6": { "ipv6": ipv6, "id_environment": id_environment } });
        narrow(self.client.post("ipv6/environment/", &payload, &[]).await?, "ipv6")
    }

    /// List the IPv4 and IPv6 addresses of an equipment
    pub async fn find_ips_by_equipment(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        narrow(
            self.client.get(&format!("ip/getbyequip/{id}/"), &["ips/ipv4", "ips/ipv6"]).await?,
            "ips",
        )
    }

    /// Register a specific IPv4 address for an equipment
    pub async fn save_ipv4(
        &self,
        ipv4: &str,
        id_equipment: impl IdParam,
        description: Option<&str>,
        id_network: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        require_ipv4(ipv4, "IPv4")?;
        let payload = json!({
            "ip_map": {
                "id_equipment": require_id(&id_equipment, "Equipment id")?,
                "id_network": require_id(&id_network, "Network id")?,
                "ip": ipv4,
                "description": description,
            }
        });
        narrow(self.client.post("ipv4/save/", &payload, &[]).await?, "ipv4")
    }

    /// Register a specific IPv6 address for an equipment
    pub async fn save_ipv6(
        &self,
        ipv6: &str,
        id_equipment: impl IdParam,
        description: Option<&str>,
        id_network: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        require_text(ipv6, "IPv6")?;
        let payload = json!({
            "ip_map": {
                "id_equipment": require_id(&id_equipment, "Equipment id")?,
                "id_network": require_id(&id_network, "Network id")?,
                "ip": ipv6,
                "description": description,
            }
        });
        narrow(self.client.post("ipv6/save/", &payload, &[]).await?, "ipv6")
    }

    /// Change the address/description of an IPv4
    pub async fn edit_ipv4(&self, ipv4: &str, description: Option<&str>, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        require_ipv4(ipv4, "IPv4")?;
        let payload = json!({
            "ip_map": {
                "ip4": ipv4,
                "descricao": description,
                "id_ip": require_id(&id_ip, "IPv4 id")?,
            }
        });
        self.client.post("ipv4/edit/", &payload, &[]).await
    }

    /// Change the address/description of an IPv6
    pub async fn edit_ipv6(&self, ipv6: &str, description: Option<&str>, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        require_text(ipv6, "IPv6")?;
        let payload = json!({
            "ip_map": {
                "ip6": ipv6,
                "descricao": description,
                "id_ip": require_id(&id_ip, "IPv6 id")?,
            }
        });
        self.client.post("ipv6/edit/", &payload, &[]).await
    }

    /// Associate an IPv4 with an equipment
    pub async fn assoc_ipv4(&self, id_ip: impl IdParam, id_equipment: impl IdParam, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "ip_map": {
                "id_ip": require_id(&id_ip, "IPv4 id")?,
                "id_equip": require_id(&id_equipment, "Equipment id")?,
                "id_net": require_id(&id_network, "Network id")?,
            }
        });
        self.client.post("ipv4/assoc/", &payload, &[]).await
    }

    /// Associate an IPv6 with an equipment
    pub async fn assoc_ipv6(&self, id_ip: impl IdParam, id_equipment: impl IdParam, id_network: impl IdParam) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "ip_map": {
                "id_ip": require_id(&id_ip, "IPv6 id")?,
                "id_equip": require_id(&id_equipment, "Equipment id")?,
                "id_net": require_id(&id_network, "Network id")?,
            }
        });
        self.client.post("ipv6/assoc/", &payload, &[]).await
    }

    /// Delete an IPv4
    pub async fn delete_ip4(&self, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_ip, "IPv4 id")?;
        self.client.delete(&format!("ip4/delete/{id}")).await
    }

    /// Delete an IPv6
    pub async fn delete_ip6(&self, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_ip, "IPv6 id")?;
        self.client.delete(&format!("ipv6/{id}/delete/")).await
    }

    /// Find the IPs of an equipment usable by an environment vip
    pub async fn get_ip_by_equip_and_vip(
        &self,
        equipment_name: &str,
        id_environment_vip: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        require_text(equipment_name, "Equipment name")?;
        let payload = json!({
            "equipamento": {
                "equip_name": equipment_name,
                "id_evip": require_id(&id_environment_vip, "Environment VIP id")?,
            }
        });
        self.client
            .post("ip/getbyequipandevip/", &payload, &["ipv4", "ipv6"])
            .await
    }

    /// Check whether an IP may be used as a vip within an environment vip
    pub async fn check_ip_for_vip(&self, id_environment_vip: impl IdParam, ip: &str) -> Result<Value, NetworkApiError> {
        let id_evip = require_id(&id_environment_vip, "Environment VIP id")?;
        require_text(ip, "IP")?;
        let path = format!("ip/checkvipip/{}/{}/", id_evip, segment(ip));
        narrow(self.client.get(&path, &[]).await?, "ip")
    }
}
