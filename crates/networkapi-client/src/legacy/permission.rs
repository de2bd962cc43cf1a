//! Permissions and the administrative permissions granted to user groups

use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id};
use serde_json::{Value, json};

/// System permission (`perms`) façade
#[derive(Debug, Clone)]
pub struct Permission {
    client: GenericClient,
}

impl Permission {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every system permission
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("perms/all/", &["perms"]).await
    }
}

/// Administrative permission (`aperms`) façade
#[derive(Debug, Clone)]
pub struct AdministrativePermission {
    client: GenericClient,
}

impl AdministrativePermission {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every administrative permission
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client.get("aperms/all/", &["perm"]).await
    }

    /// List the administrative permissions of a user group
    pub async fn list_by_group(&self, id_user_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user_group, "User group id")?;
        self.client
            .get(&format!("aperms/group/{id}/"), &["perms"])
            .await
    }

    /// Get one administrative permission
    pub async fn search(&self, id_permission: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_permission, "Administrative permission id")?;
        narrow(self.client.get(&format!("aperms/get/{id}/"), &[]).await?, "perm")
    }

    /// Grant a permission to a user group, returning the new grant id
    pub async fn insert(
        &self,
        id_permission: impl IdParam,
        id_group: impl IdParam,
        read: bool,
        write: bool,
    ) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "administrative_permission": {
                "id_permission": require_id(&id_permission, "Permission id")?,
                "id_group": require_id(&id_group, "Group id")?,
                "read": read,
                "write": write,
            }
        });
        narrow(self.client.post("aperms/", &payload, &[]).await?, "perm")
    }

    /// Change a grant
    pub async fn update(
        &self,
        id_perm: impl IdParam,
        id_permission: impl IdParam,
        id_group: impl IdParam,
        read: bool,
        write: bool,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_perm, "Administrative permission id")?;
        let payload = json!({
            "administrative_permission": {
                "id_permission": require_id(&id_permission, "Permission id")?,
                "id_group": require_id(&id_group, "Group id")?,
                "read": read,
                "write": write,
            }
        });
        self.client.put(&format!("aperms/{id}/"), &payload, &[]).await
    }

    /// Revoke a grant
    pub async fn remove(&self, id_perm: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_perm, "Administrative permission id")?;
        self.client.delete(&format!("aperms/{id}/")).await
    }
}
