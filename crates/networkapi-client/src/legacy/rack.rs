//! Rack resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// Fields of a rack insert/edit
///
/// The top-of-rack switches and the console are given by equipment id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RackRequest {
    /// Rack number
    pub number: u32,
    /// Rack name
    pub name: String,
    /// MAC address of the first top-of-rack switch
    pub mac_address_sw1: Option<String>,
    /// MAC address of the second top-of-rack switch
    pub mac_address_sw2: Option<String>,
    /// MAC address of the out-of-band switch
    pub mac_address_ilo: Option<String>,
    /// First top-of-rack switch id
    pub id_sw1: Option<u64>,
    /// Second top-of-rack switch id
    pub id_sw2: Option<u64>,
    /// Out-of-band switch id
    pub id_ilo: Option<u64>,
}

/// Rack façade
#[derive(Debug, Clone)]
pub struct Rack {
    client: GenericClient,
}

impl Rack {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Insert a rack
    pub async fn insert(&self, request: &RackRequest) -> Result<Value, NetworkApiError> {
        require_text(&request.name, "Rack name")?;
        let payload = json!({ "rack": request });
        narrow(self.client.post("rack/insert/", &payload, &[]).await?, "rack")
    }

    /// List every rack
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client.get("rack/list/", &["rack"]).await
    }

    /// Find the rack holding a named equipment
    pub async fn get_by_equipment_name(&self, equipment_name: &str) -> Result<Value, NetworkApiError> {
        require_text(equipment_name, "Equipment name")?;
        self.client
            .get(&format!("rack/find/{}/", segment(equipment_name)), &["rack"])
            .await
    }

    /// Edit a rack
    pub async fn edit(&self, id_rack: impl IdParam, request: &RackRequest) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_rack, "Rack id")?;
        require_text(&request.name, "Rack name")?;
        let payload = json!({ "rack": request });
        self.client.put(&format!("rack/edit/{id}/"), &payload, &[]).await
    }

    /// Remove a rack
    pub async fn remove(&self, id_rack: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_rack, "Rack id")?;
        self.client.delete(&format!("rack/{id}/")).await
    }

    /// Generate the configuration files of a rack's switches
    pub async fn generate_config(&self, id_rack: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_rack, "Rack id")?;
        self.client
            .request(HttpMethod::Post, &format!("rack/gerar-arq-config/{id}/"), None, &[])
            .await
    }

    /// Push the generated configuration to a rack's switches
    pub async fn apply_config(&self, id_rack: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_rack, "Rack id")?;
        self.client
            .request(HttpMethod::Post, &format!("rack/aplicar-config/{id}/"), None, &[])
            .await
    }

    /// Create the environments a rack's networks are allocated from
    pub async fn allocate_environments(&self, id_rack: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_rack, "Rack id")?;
        self.client
            .request(HttpMethod::Post, &format!("rack/alocar-config/{id}/"), None, &[])
            .await
    }
}
