//! Equipment interface resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// Fields of an interface insert/update
#[derive(Debug, Clone, Default, Serialize)]
pub struct InterfaceRequest {
    /// Interface name (`eth0`, `Gi1/0/1`)
    #[serde(rename = "nome")]
    pub name: String,
    /// Protected port
    #[serde(rename = "protegida")]
    pub protected: bool,
    /// Description
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    /// Front interface id
    #[serde(rename = "id_ligacao_front")]
    pub front_id: Option<u64>,
    /// Back interface id
    #[serde(rename = "id_ligacao_back")]
    pub back_id: Option<u64>,
    /// Owning equipment id
    #[serde(rename = "id_equipamento")]
    pub equipment_id: u64,
    /// Interface type id
    #[serde(rename = "tipo")]
    pub interface_type: Option<u64>,
    /// VLAN used for untagged traffic
    pub vlan: Option<u32>,
}

/// Interface façade
#[derive(Debug, Clone)]
pub struct Interface {
    client: GenericClient,
}

impl Interface {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List the interfaces of an equipment
    pub async fn list_by_equipment(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client
            .get(&format!("interface/equipamento/{id}/"), &["interface"])
            .await
    }

    /// Get one interface
    pub async fn get_by_id(&self, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        narrow(self.client.get(&format!("interface/{id}/get/"), &[]).await?, "interface")
    }

    /// Insert an interface, returning its new id
    pub async fn insert(&self, request: &InterfaceRequest) -> Result<Value, NetworkApiError> {
        require_text(&request.name, "Interface name")?;
        let payload = json!({ "interface": request });
        narrow(self.client.post("interface/", &payload, &[]).await?, "interface")
    }

    /// Update an interface
    pub async fn update(&self, id_interface: impl IdParam, request: &InterfaceRequest) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        require_text(&request.name, "Interface name")?;
        let payload = json!({ "interface": request });
        self.client.put(&format!("interface/{id}/"), &payload, &[]).await
    }

    /// Remove an interface
    pub async fn remove(&self, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        self.client.delete(&format!("interface/{id}/")).await
    }

    /// Remove the front or back connection of an interface
    pub async fn remove_connection(&self, id_interface: impl IdParam, back_or_front: u8) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        if back_or_front > 1 {
            return Err(NetworkApiError::invalid_parameter(
                "Back or front is invalid or was not informed.",
            ));
        }
        self.client
            .delete(&format!("interface/{id}/{back_or_front}/"))
            .await
    }

    /// Follow the connections of a named interface across equipment
    pub async fn list_connections(&self, interface_name: &str, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        require_text(interface_name, "Interface name")?;
        let id = require_id(&id_equipment, "Equipment id")?;
        let path = format!("interface/{}/equipment/{}/", segment(interface_name), id);
        self.client.get(&path, &["interfaces"]).await
    }

    /// List the environments configured on a switch port
    pub async fn get_environments(&self, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        self.client
            .get(&format!("int/getenvs/{id}/"), &["ambiente"])
            .await
    }

    /// Associate an environment with a switch port
    pub async fn associate_environment(&self, id_environment: impl IdParam, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        let id_interface = require_id(&id_interface, "Interface id")?;
        let payload = json!({ "interface": { "ambiente": id_environment } });
        self.client
            .put(&format!("int/associar-ambiente/{id_interface}/"), &payload, &[])
            .await
    }

    /// Dissociate an environment from a switch port
    pub async fn dissociate_environment(&self, id_environment: impl IdParam, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_environment = require_id(&id_environment, "Environment id")?;
        let id_interface = require_id(&id_interface, "Interface id")?;
        self.client
            .delete(&format!("int/dissociar-ambiente/{id_interface}/{id_environment}/"))
            .await
    }
}
