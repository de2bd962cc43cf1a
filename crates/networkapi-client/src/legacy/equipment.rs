//! Equipment (`equipamento`) resources

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::{Pagination, narrow};
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Map, Value, json};

/// Search filters of [`Equipment::find`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EquipmentSearch {
    /// Equipment name
    #[serde(rename = "nome")]
    pub name: Option<String>,
    /// Match the name exactly
    #[serde(rename = "exato")]
    pub iexact: bool,
    /// Environment id
    #[serde(rename = "ambiente")]
    pub environment: Option<u64>,
    /// Equipment type id
    #[serde(rename = "tipo_equipamento")]
    pub equip_type: Option<u64>,
    /// Equipment group id
    #[serde(rename = "grupo")]
    pub group: Option<u64>,
    /// IP address
    pub ip: Option<String>,
}

/// Equipment façade
#[derive(Debug, Clone)]
pub struct Equipment {
    client: GenericClient,
}

impl Equipment {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// Insert an equipment into a group, returning the new equipment and group association ids
    pub async fn insert(
        &self,
        name: &str,
        id_equipment_type: impl IdParam,
        id_model: impl IdParam,
        id_group: impl IdParam,
        maintenance: bool,
    ) -> Result<Value, NetworkApiError> {
        require_text(name, "Equipment name")?;
        let payload = json!({
            "equipamento": {
                "id_tipo_equipamento": require_id(&id_equipment_type, "Equipment type id")?,
                "id_modelo": require_id(&id_model, "Model id")?,
                "nome": name,
                "id_grupo": require_id(&id_group, "Group id")?,
                "maintenance": maintenance,
            }
        });
        self.client.post("equipamento/", &payload, &[]).await
    }

    /// Edit an equipment
    pub async fn edit(
        &self,
        id_equipment: impl IdParam,
        name: &str,
        id_equipment_type: impl IdParam,
        id_model: impl IdParam,
        maintenance: bool,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        require_text(name, "Equipment name")?;
        let payload = json!({
            "equipamento": {
                "id_tipo_equipamento": require_id(&id_equipment_type, "Equipment type id")?,
                "id_modelo": require_id(&id_model, "Model id")?,
                "nome": name,
                "maintenance": maintenance,
            }
        });
        self.client.put(&format!("equipamento/edit/{id}/"), &payload, &[]).await
    }

    /// Remove an equipment
    pub async fn remove(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client.delete(&format!("equipamento/{id}/")).await
    }

    /// Get an equipment by name
    pub async fn get_by_name(&self, name: &str) -> Result<Value, NetworkApiError> {
        require_text(name, "Equipment name")?;
        let response = self
            .client
            .get(&format!("equipamento/nome/{}/", segment(name)), &[])
            .await?;
        narrow(response, "equipamento")
    }

    /// Get an equipment by id
    pub async fn get_by_id(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        narrow(self.client.get(&format!("equipamento/id/{id}/"), &[]).await?, "equipamento")
    }

    /// List every equipment
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("equipamento/list/", &["equipamentos"]).await
    }

    /// List equipment of one type in one environment
    pub async fn list_by_type_and_environment(
        &self,
        id_equipment_type: impl IdParam,
        id_environment: impl IdParam,
    ) -> Result<Value, NetworkApiError> {
        let id_type = require_id(&id_equipment_type, "Equipment type id")?;
        let id_environment = require_id(&id_environment, "Environment id")?;
        self.client
            .get(
                &format!("equipamento/tipoequipamento/{id_type}/ambiente/{id_environment}/"),
                &["equipamento"],
            )
            .await
    }

    /// Search equipment with pagination
    pub async fn find(&self, search: &EquipmentSearch, pagination: &Pagination) -> Result<Value, NetworkApiError> {
        let mut map = match serde_json::to_value(search)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        pagination.apply(&mut map)?;
        let payload = json!({ "equipamento": map });
        self.client
            .post(
                "equipment/find/",
                &payload,
                &["equipamento", "equipamento/ips", "equipamento/grupos"],
            )
            .await
    }

    /// Associate an existing ip with an equipment
    pub async fn associate_ip(&self, id_equipment: impl IdParam, id_ip: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_ip = require_id(&id_ip, "IP id")?;
        let path = format!("ip/{id_ip}/equipamento/{id_equipment}/");
        narrow(self.client.request(HttpMethod::Put, &path, None, &[]).await?, "ip_equipamento")
    }

    /// Allocate the next IPv4 address of a network to an equipment
    pub async fn add_ipv4(
        &self,
        id_network_ipv4: impl IdParam,
        id_equipment: impl IdParam,
        description: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "ip": {
                "id_network_ipv4": require_id(&id_network_ipv4, "Network IPv4 id")?,
                "id_equipamento": require_id(&id_equipment, "Equipment id")?,
                "descricao": description,
            }
        });
        narrow(self.client.post("ipv4/", &payload, &[]).await?, "ip")
    }

    /// Allocate the next IPv6 address of a network to an equipment
    pub async fn add_ipv6(
        &self,
        id_network_ipv6: impl IdParam,
        id_equipment: impl IdParam,
        description: Option<&str>,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "ip": {
                "id_network_ipv6": require_id(&id_network_ipv6, "Network IPv6 id")?,
                "id_equip": require_id(&id_equipment, "Equipment id")?,
                "description": description,
            }
        });
        narrow(self.client.post("ipv6/", &payload, &[]).await?, "ip")
    }

    /// Add an equipment to an equipment group
    pub async fn associate_group(&self, id_equipment: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "equipamento_grupo": {
                "id_equipamento": require_id(&id_equipment, "Equipment id")?,
                "id_grupo": require_id(&id_group, "Group id")?,
            }
        });
        self.client.post("equipamentogrupo/associa/", &payload, &[]).await
    }

    /// Remove an equipment from an equipment group
    pub async fn remove_group(&self, id_equipment: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_group = require_id(&id_group, "Group id")?;
        self.client
            .delete(&format!("equipamentogrupo/equipamento/{id_equipment}/egrupo/{id_group}/"))
            .await
    }

    /// List the vips whose reals include the equipment
    pub async fn get_real_related(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client
            .get(&format!("equipamento/get_real_related/{id}/"), &["vips"])
            .await
    }
}
