//! Vip requests: registration, validation and lifecycle on the load balancer

use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// One real server behind a vip
#[derive(Debug, Clone, Default, Serialize)]
pub struct VipReal {
    /// Real server name
    pub real_name: String,
    /// Real server IP
    pub real_ip: String,
}

/// Fields of a vip request insert/edit
#[derive(Debug, Clone, Default, Serialize)]
pub struct VipRequest {
    /// IPv4 id
    pub id_ipv4: Option<u64>,
    /// IPv6 id
    pub id_ipv6: Option<u64>,
    /// Expected healthcheck response
    pub id_healthcheck_expect: Option<u64>,
    /// Finality of the environment vip
    pub finalidade: String,
    /// Client of the environment vip
    pub cliente: String,
    /// P44 environment of the environment vip
    pub ambiente: String,
    /// Cache group
    pub cache: String,
    /// Balancing method
    pub metodo_bal: String,
    /// Persistence
    pub persistencia: String,
    /// Healthcheck type
    pub healthcheck_type: String,
    /// Healthcheck command
    pub healthcheck: Option<String>,
    /// Timeout option
    pub timeout: String,
    /// Host name
    pub host: String,
    /// Maximum connections per real
    pub maxcon: u32,
    /// Business area
    pub areanegocio: String,
    /// Service name
    pub nome_servico: String,
    /// Layer 7 filter
    pub l7_filter: Option<String>,
    /// Ports as `vip:real` pairs
    pub portas_servicos: Vec<String>,
    /// Real servers
    pub reals: Vec<VipReal>,
    /// Priority of each real
    pub reals_prioritys: Vec<u32>,
    /// Weight of each real
    pub reals_weights: Vec<u32>,
    /// Rule id
    pub rule_id: Option<u64>,
}

impl VipRequest {
    fn to_payload(&self) -> Result<Value, NetworkApiError> {
        let mut vip = serde_json::to_value(self)?;
        // Lists go under a wrapper element per item
        vip["portas_servicos"] = json!({ "porta": self.portas_servicos });
        vip["reals"] = json!({ "real": self.reals });
        vip["reals_prioritys"] = json!({ "reals_priority": self.reals_prioritys });
        vip["reals_weights"] = json!({ "reals_weight": self.reals_weights });
        Ok(json!({ "vip": vip }))
    }
}

/// Real server operation of [`Vip::manage_real`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealOperation {
    /// Attach the real to the vip
    Add,
    /// Detach the real from the vip
    Remove,
    /// Enable traffic to the real
    Enable,
    /// Disable traffic to the real
    Disable,
}

impl RealOperation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "del",
            Self::Enable => "ena",
            Self::Disable => "dis",
        }
    }
}

/// Vip request façade
#[derive(Debug, Clone)]
pub struct Vip {
    client: GenericClient,
}

impl Vip {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every vip request
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("vip/all/", &["vip"]).await
    }

    /// Get one vip request
    pub async fn get_by_id(&self, id_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        let response = self
            .client
            .get(
                &format!("vip/{id}/"),
                &["vip/reals", "vip/portas_servicos", "vip/reals_prioritys", "vip/reals_weights"],
            )
            .await?;
        narrow(response, "vip")
    }

    /// List the vip requests using an IPv4 address
    pub async fn get_by_ipv4(&self, id_ipv4: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_ipv4, "IPv4 id")?;
        self.client.get(&format!("vip/ipv4/{id}/"), &["vips"]).await
    }

    /// Register a vip request, returning its new id
    pub async fn add(&self, request: &VipRequest) -> Result<Value, NetworkApiError> {
        require_text(&request.finalidade, "Finality")?;
        require_text(&request.host, "Host")?;
        narrow(self.client.post("vip/", &request.to_payload()?, &[]).await?, "requisicao_vip")
    }

    /// Edit a vip request that was not created yet
    pub async fn alter(&self, id_vip: impl IdParam, request: &VipRequest) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        require_text(&request.finalidade, "Finality")?;
        require_text(&request.host, "Host")?;
        self.client
            .put(&format!("vip/{id}/"), &request.to_payload()?, &[])
            .await
    }

    /// Mark a vip request as validated
    pub async fn validate(&self, id_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        self.client.get(&format!("vip/validate/{id}/"), &[]).await
    }

    /// Create the vip on the load balancer
    pub async fn create(&self, id_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        let payload = json!({ "vip": { "id_vip": id } });
        self.client.post("vip/create/", &payload, &[]).await
    }

    /// Remove the vip from the load balancer, keeping the request
    pub async fn remove_script(&self, id_vip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        let payload = json!({ "vip": { "id_vip": id } });
        self.client.post("vip/remove/", &payload, &[]).await
    }

    /// Delete a vip request, optionally keeping its IP allocated
    pub async fn remove(&self, id_vip: impl IdParam, keep_ip: bool) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        let keep = u8::from(keep_ip);
        self.client
            .delete(&format!("vip/delete/{id}/?keepip={keep}"))
            .await
    }

    /// Add, remove, enable or disable a real server of a vip
    pub async fn manage_real(
        &self,
        operation: RealOperation,
        id_vip: impl IdParam,
        id_ip: impl IdParam,
        id_equipment: impl IdParam,
        port_vip: Option<u16>,
        port_real: Option<u16>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "vip": {
                "vip_id": require_id(&id_vip, "Vip id")?,
                "ip_id": require_id(&id_ip, "IP id")?,
                "equip_id": require_id(&id_equipment, "Equipment id")?,
                "port_vip": port_vip,
                "port_real": port_real,
            }
        });
        self.client
            .post(&format!("vip/real/{}/", operation.as_str()), &payload, &[])
            .await
    }

    /// Change the maximum connections per real server
    pub async fn set_maxcon(&self, id_vip: impl IdParam, maxcon: u32) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        self.client
            .request(HttpMethod::Put, &format!("vip/{id}/maxcon/{maxcon}/"), None, &[])
            .await
    }

    /// Change the priority of each real server, in the order they were registered
    pub async fn set_priority(&self, id_vip: impl IdParam, priorities: &[u32]) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        let payload = json!({ "vip": { "reals_prioritys": { "reals_priority": priorities } } });
        self.client
            .put(&format!("vip/{id}/priority/"), &payload, &[])
            .await
    }

    /// Change the healthcheck of a vip
    pub async fn set_healthcheck(
        &self,
        id_vip: impl IdParam,
        healthcheck_type: &str,
        healthcheck: Option<&str>,
        id_healthcheck_expect: Option<u64>,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_vip, "Vip id")?;
        require_text(healthcheck_type, "Healthcheck type")?;
        let payload = json!({
            "vip": {
                "healthcheck_type": healthcheck_type,
                "healthcheck": healthcheck,
                "id_healthcheck_expect": id_healthcheck_expect,
            }
        });
        self.client
            .put(&format!("vip/{id}/healthcheck/"), &payload, &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vip_payload_wraps_lists() {
        let request = VipRequest {
            finalidade: "Producao".into(),
            host: "app.example.com".into(),
            portas_servicos: vec!["80:8080".into()],
            reals: vec![VipReal {
                real_name: "web01".into(),
                real_ip: "10.0.0.11".into(),
            }],
            reals_prioritys: vec![1],
            reals_weights: vec![2],
            ..VipRequest::default()
        };
        let payload = request.to_payload().unwrap();
        assert_eq!(payload["vip"]["portas_servicos"], json!({ "porta": ["80:8080"] }));
        assert_eq!(payload["vip"]["reals"]["real"][0]["real_ip"], "10.0.0.11");
        assert_eq!(payload["vip"]["reals_weights"], json!({ "reals_weight": [2] }));
    }

    #[test]
    fn test_real_operation_names() {
        assert_eq!(RealOperation::Add.as_str(), "add");
        assert_eq!(RealOperation::Disable.as_str(), "dis");
    }
}
