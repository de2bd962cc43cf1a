//! Environment filters and the equipment types they admit

use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::transport::HttpMethod;
use crate::validation::{IdParam, require_id, require_text};
use serde_json::{Value, json};

/// Filter façade
#[derive(Debug, Clone)]
pub struct Filter {
    client: GenericClient,
}

impl Filter {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every filter with its equipment types
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("filter/all/", &["filter", "filter/equip_types"])
            .await
    }

    /// Get one filter
    pub async fn get(&self, id_filter: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_filter, "Filter id")?;
        narrow(
            self.client.get(&format!("filter/get/{id}/"), &["filter/equip_types"]).await?,
            "filter",
        )
    }

    /// Insert a filter, returning its new id
    pub async fn add(&self, name: &str, description: Option<&str>) -> Result<Value, NetworkApiError> {
        require_text(name, "Filter name")?;
        let payload = json!({ "filter": { "name": name, "description": description } });
        narrow(self.client.post("filter/", &payload, &[]).await?, "filter")
    }

    /// Edit a filter
    pub async fn alter(&self, id_filter: impl IdParam, name: &str, description: Option<&str>) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_filter, "Filter id")?;
        require_text(name, "Filter name")?;
        let payload = json!({ "filter": { "name": name, "description": description } });
        self.client.put(&format!("filter/{id}/"), &payload, &[]).await
    }

    /// Remove a filter
    pub async fn remove(&self, id_filter: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_filter, "Filter id")?;
        self.client.delete(&format!("filter/{id}/")).await
    }

    /// Admit an equipment type into a filter
    pub async fn associate(&self, id_equipment_type: impl IdParam, id_filter: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_type = require_id(&id_equipment_type, "Equipment type id")?;
        let id_filter = require_id(&id_filter, "Filter id")?;
        let response = self
            .client
            .request(
                HttpMethod::Put,
                &format!("filter/{id_filter}/equiptype/{id_type}/"),
                None,
                &[],
            )
            .await?;
        narrow(response, "equiptype_filter_xref")
    }

    /// Drop an equipment type from a filter
    pub async fn dissociate(&self, id_filter: impl IdParam, id_equipment_type: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_filter = require_id(&id_filter, "Filter id")?;
        let id_type = require_id(&id_equipment_type, "Equipment type id")?;
        self.client
            .request(
                HttpMethod::Put,
                &format!("filter/{id_filter}/dissociate/{id_type}/"),
                None,
                &[],
            )
            .await
    }
}
