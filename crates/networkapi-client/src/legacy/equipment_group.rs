//! Equipment groups (`egrupo`) and the rights user groups hold on them

use crate::common::GenericClient;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_text};
use serde::Serialize;
use serde_json::{Value, json};

/// Equipment group façade
#[derive(Debug, Clone)]
pub struct EquipmentGroup {
    client: GenericClient,
}

impl EquipmentGroup {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every equipment group
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("egrupo/", &["grupo"]).await
    }

    /// List the groups of an equipment
    pub async fn list_by_equipment(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client
            .get(&format!("egrupo/equip/{id}/"), &["grupo"])
            .await
    }

    /// Get one equipment group
    pub async fn search(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        narrow(self.client.get(&format!("egroup/{id}/"), &[]).await?, "group")
    }

    /// Insert an equipment group, returning its new id
    pub async fn insert(&self, name: &str) -> Result<Value, NetworkApiError> {
        require_text(name, "Group name")?;
        let payload = json!({ "grupo": { "nome": name } });
        narrow(self.client.post("egrupo/", &payload, &[]).await?, "grupo")
    }

    /// Rename an equipment group
    pub async fn update(&self, id_group: impl IdParam, name: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        require_text(name, "Group name")?;
        let payload = json!({ "grupo": { "nome": name } });
        self.client.put(&format!("egrupo/{id}/"), &payload, &[]).await
    }

    /// Remove an equipment group
    pub async fn remove(&self, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_group, "Group id")?;
        self.client.delete(&format!("egrupo/{id}/")).await
    }

    /// Add an equipment to the group
    pub async fn associate_equipment(&self, id_equipment: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "equipamento_grupo": {
                "id_equipamento": require_id(&id_equipment, "Equipment id")?,
                "id_grupo": require_id(&id_group, "Group id")?,
            }
        });
        narrow(
            self.client.post("equipamentogrupo/associa/", &payload, &[]).await?,
            "equipamento_grupo",
        )
    }

    /// Remove an equipment from the group
    pub async fn remove_equipment(&self, id_equipment: impl IdParam, id_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_group = require_id(&id_group, "Group id")?;
        self.client
            .delete(&format!("egrupo/equipamento/{id_equipment}/egrupo/{id_group}/"))
            .await
    }
}

/// Rights a user group holds on an equipment group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rights {
    /// May read
    #[serde(rename = "leitura", serialize_with = "flag")]
    pub read: bool,
    /// May write
    #[serde(rename = "escrita", serialize_with = "flag")]
    pub write: bool,
    /// May update config
    #[serde(rename = "alterar_config", serialize_with = "flag")]
    pub update_config: bool,
    /// May delete
    #[serde(rename = "exclusao", serialize_with = "flag")]
    pub delete: bool,
}

fn flag<S: serde::Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "1" } else { "0" })
}

/// Equipment group rights (`direitosgrupoequipamento`) façade
#[derive(Debug, Clone)]
pub struct EquipmentGroupRights {
    client: GenericClient,
}

impl EquipmentGroupRights {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every right
    pub async fn list(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("direitosgrupoequipamento/", &["direito_grupo_equipamento"])
            .await
    }

    /// List the rights of a user group
    pub async fn list_by_user_group(&self, id_user_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_user_group, "User group id")?;
        self.client
            .get(
                &format!("direitosgrupoequipamento/ugrupo/{id}/"),
                &["direito_grupo_equipamento"],
            )
            .await
    }

    /// List the rights held on an equipment group
    pub async fn list_by_equipment_group(&self, id_equipment_group: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment_group, "Equipment group id")?;
        self.client
            .get(
                &format!("direitosgrupoequipamento/egrupo/{id}/"),
                &["direito_grupo_equipamento"],
            )
            .await
    }

    /// Get one right
    pub async fn get_by_id(&self, id_right: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_right, "Right id")?;
        narrow(
            self.client.get(&format!("direitosgrupoequipamento/{id}/"), &[]).await?,
            "direito_grupo_equipamento",
        )
    }

    /// Grant a user group rights on an equipment group
    pub async fn insert(
        &self,
        id_user_group: impl IdParam,
        id_equipment_group: impl IdParam,
        rights: Rights,
    ) -> Result<Value, NetworkApiError> {
        let mut payload = json!({
            "direito_grupo_equipamento": {
                "id_grupo_usuario": require_id(&id_user_group, "User group id")?,
                "id_grupo_equipamento": require_id(&id_equipment_group, "Equipment group id")?,
            }
        });
        merge(&mut payload["direito_grupo_equipamento"], &rights)?;
        narrow(
            self.client.post("direitosgrupoequipamento/", &payload, &[]).await?,
            "direito_grupo_equipamento",
        )
    }

    /// Change the rights of an existing grant
    pub async fn update(&self, id_right: impl IdParam, rights: Rights) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_right, "Right id")?;
        let mut payload = json!({ "direito_grupo_equipamento": {} });
        merge(&mut payload["direito_grupo_equipamento"], &rights)?;
        self.client
            .put(&format!("direitosgrupoequipamento/{id}/"), &payload, &[])
            .await
    }

    /// Revoke a grant
    pub async fn remove(&self, id_right: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_right, "Right id")?;
        self.client
            .delete(&format!("direitosgrupoequipamento/{id}/"))
            .await
    }
}

fn merge(target: &mut Value, rights: &Rights) -> Result<(), NetworkApiError> {
    if let (Value::Object(target), Value::Object(fields)) = (target, serde_json::to_value(rights)?) {
        target.extend(fields);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rights_serialize_as_flags() {
        let rights = Rights {
            read: true,
            write: false,
            update_config: true,
            delete: false,
        };
        assert_eq!(
            serde_json::to_value(rights).unwrap(),
            json!({ "leitura": "1", "escrita": "0", "alterar_config": "1", "exclusao": "0" })
        );
    }
}
