//! Catalogue resources: brands, models, types and the small lookup tables
//! environments and equipment refer to

use crate::common::GenericClient;
use crate::common::query::segment;
use crate::error::NetworkApiError;
use crate::models::narrow;
use crate::validation::{IdParam, require_id, require_text};
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

/// Name-only catalogues share one shape: list, insert, rename, remove
macro_rules! named_catalogue {
    ($(#[$doc:meta])* $name:ident, $path:literal, $key:literal, $field:literal, $label:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            client: GenericClient,
        }

        impl $name {
            /// Create the façade over a shared client
            pub fn new(client: GenericClient) -> Self {
                Self { client }
            }

            /// List every entry
            pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
                self.client.get($path, &[$key]).await
            }

            /// Insert an entry, returning its new id
            pub async fn insert(&self, name: &str) -> Result<Value, NetworkApiError> {
                require_text(name, $label)?;
                let payload = json!({ $key: { $field: name } });
                narrow(self.client.post($path, &payload, &[]).await?, $key)
            }

            /// Rename an entry
            pub async fn update(&self, id: impl IdParam, name: &str) -> Result<Value, NetworkApiError> {
                let id = require_id(&id, concat!($label, " id"))?;
                require_text(name, $label)?;
                let payload = json!({ $key: { $field: name } });
                self.client.put(&format!("{}{}/", $path, id), &payload, &[]).await
            }

            /// Remove an entry
            pub async fn remove(&self, id: impl IdParam) -> Result<Value, NetworkApiError> {
                let id = require_id(&id, concat!($label, " id"))?;
                self.client.delete(&format!("{}{}/", $path, id)).await
            }
        }
    };
}

named_catalogue!(
    /// Equipment brand (`marca`) façade
    Brand, "marca/", "marca", "nome", "Brand"
);
named_catalogue!(
    /// Datacenter division (`divisao_dc`) façade
    DcDivision, "divisaodc/", "divisao_dc", "nome", "Division"
);
named_catalogue!(
    /// Layer 3 group (`grupo_l3`) façade
    GroupL3, "grupol3/", "grupo_l3", "nome", "Group L3"
);
named_catalogue!(
    /// Logical environment (`ambiente_logico`) façade
    LogicalEnvironment, "ambientelogico/", "ambiente_logico", "nome", "Logical environment"
);
named_catalogue!(
    /// Network type (`net_type`) façade
    NetworkType, "net_type/", "net_type", "name", "Network type"
);

/// Equipment model (`modelo`) façade
#[derive(Debug, Clone)]
pub struct Model {
    client: GenericClient,
}

impl Model {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every model
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("modelo/", &["model"]).await
    }

    /// List the models of a brand
    pub async fn list_by_brand(&self, id_brand: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_brand, "Brand id")?;
        self.client.get(&format!("modelo/marca/{id}/"), &["modelo"]).await
    }

    /// Insert a model, returning its new id
    pub async fn insert(&self, id_brand: impl IdParam, name: &str) -> Result<Value, NetworkApiError> {
        require_text(name, "Model name")?;
        let payload = json!({
            "model": {
                "id_brand": require_id(&id_brand, "Brand id")?,
                "name": name,
            }
        });
        narrow(self.client.post("model/", &payload, &[]).await?, "model")
    }

    /// Edit a model
    pub async fn update(&self, id_model: impl IdParam, id_brand: impl IdParam, name: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_model, "Model id")?;
        require_text(name, "Model name")?;
        let payload = json!({
            "model": {
                "id_brand": require_id(&id_brand, "Brand id")?,
                "name": name,
            }
        });
        self.client.put(&format!("model/{id}/"), &payload, &[]).await
    }

    /// Remove a model
    pub async fn remove(&self, id_model: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_model, "Model id")?;
        self.client.delete(&format!("model/{id}/")).await
    }
}

/// Equipment type (`tipo_equipamento`) façade
#[derive(Debug, Clone)]
pub struct EquipmentType {
    client: GenericClient,
}

impl EquipmentType {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every equipment type
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("equipmenttype/all/", &["equipment_type"]).await
    }

    /// Insert an equipment type, returning its new id
    pub async fn insert(&self, name: &str) -> Result<Value, NetworkApiError> {
        require_text(name, "Equipment type name")?;
        let payload = json!({ "equipment_type": { "name": name } });
        narrow(
            self.client.post("equipmenttype/", &payload, &[]).await?,
            "equipment_type",
        )
    }
}

/// Equipment access type (`tipo_acesso`) façade
#[derive(Debug, Clone)]
pub struct AccessType {
    client: GenericClient,
}

impl AccessType {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every access type
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("tipoacesso/", &["tipo_acesso"]).await
    }

    /// Insert an access protocol, returning its new id
    pub async fn insert(&self, protocol: &str) -> Result<Value, NetworkApiError> {
        require_text(protocol, "Protocol")?;
        let payload = json!({ "tipo_acesso": { "protocolo": protocol } });
        narrow(self.client.post("tipoacesso/", &payload, &[]).await?, "tipo_acesso")
    }

    /// Rename an access protocol
    pub async fn update(&self, id_access_type: impl IdParam, protocol: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_access_type, "Access type id")?;
        require_text(protocol, "Protocol")?;
        let payload = json!({ "tipo_acesso": { "protocolo": protocol } });
        self.client.put(&format!("tipoacesso/{id}/"), &payload, &[]).await
    }

    /// Remove an access protocol
    pub async fn remove(&self, id_access_type: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_access_type, "Access type id")?;
        self.client.delete(&format!("tipoacesso/{id}/")).await
    }
}

/// Script type (`tipo_roteiro`) façade
#[derive(Debug, Clone)]
pub struct ScriptType {
    client: GenericClient,
}

impl ScriptType {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every script type
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("tiporoteiro/", &["tipo_roteiro"]).await
    }

    /// Insert a script type, returning its new id
    pub async fn insert(&self, script_type: &str, description: &str) -> Result<Value, NetworkApiError> {
        require_text(script_type, "Script type")?;
        let payload = json!({ "tipo_roteiro": { "tipo": script_type, "descricao": description } });
        narrow(self.client.post("tiporoteiro/", &payload, &[]).await?, "tipo_roteiro")
    }

    /// Edit a script type
    pub async fn update(&self, id_script_type: impl IdParam, script_type: &str, description: &str) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_script_type, "Script type id")?;
        require_text(script_type, "Script type")?;
        let payload = json!({ "tipo_roteiro": { "tipo": script_type, "descricao": description } });
        self.client.put(&format!("tiporoteiro/{id}/"), &payload, &[]).await
    }

    /// Remove a script type
    pub async fn remove(&self, id_script_type: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_script_type, "Script type id")?;
        self.client.delete(&format!("tiporoteiro/{id}/")).await
    }
}

/// Script (`roteiro`) façade
#[derive(Debug, Clone)]
pub struct Script {
    client: GenericClient,
}

impl Script {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every script
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client.get("roteiro/", &["roteiro"]).await
    }

    /// List the scripts of one type
    pub async fn list_by_type(&self, id_script_type: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_script_type, "Script type id")?;
        self.client
            .get(&format!("roteiro/tiporoteiro/{id}/"), &["roteiro"])
            .await
    }

    /// List the scripts associated with an equipment
    pub async fn list_by_equipment(&self, id_equipment: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_equipment, "Equipment id")?;
        self.client
            .get(&format!("roteiro/equipamento/{id}/"), &["roteiro"])
            .await
    }

    /// Insert a script, returning its new id
    pub async fn insert(&self, id_script_type: impl IdParam, script: &str, description: &str) -> Result<Value, NetworkApiError> {
        require_text(script, "Script")?;
        let payload = json!({
            "roteiro": {
                "id_tipo_roteiro": require_id(&id_script_type, "Script type id")?,
                "nome": script,
                "descricao": description,
            }
        });
        narrow(self.client.post("roteiro/", &payload, &[]).await?, "roteiro")
    }

    /// Edit a script
    pub async fn update(
        &self,
        id_script: impl IdParam,
        id_script_type: impl IdParam,
        script: &str,
        description: &str,
    ) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_script, "Script id")?;
        require_text(script, "Script")?;
        let payload = json!({
            "roteiro": {
                "id_tipo_roteiro": require_id(&id_script_type, "Script type id")?,
                "nome": script,
                "descricao": description,
            }
        });
        self.client.put(&format!("roteiro/{id}/"), &payload, &[]).await
    }

    /// Remove a script
    pub async fn remove(&self, id_script: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_script, "Script id")?;
        self.client.delete(&format!("roteiro/{id}/")).await
    }
}

/// Equipment/script association (`equipamento_roteiro`) façade
#[derive(Debug, Clone)]
pub struct EquipmentScript {
    client: GenericClient,
}

impl EquipmentScript {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every association visible to the user
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("equipamentoroteiro/", &["equipamento_roteiro"])
            .await
    }

    /// Associate a script with an equipment
    pub async fn insert(&self, id_equipment: impl IdParam, id_script: impl IdParam) -> Result<Value, NetworkApiError> {
        let payload = json!({
            "equipamento_roteiro": {
                "id_equipamento": require_id(&id_equipment, "Equipment id")?,
                "id_roteiro": require_id(&id_script, "Script id")?,
            }
        });
        narrow(
            self.client.post("equipamentoroteiro/", &payload, &[]).await?,
            "equipamento_roteiro",
        )
    }

    /// Dissociate a script from an equipment
    pub async fn remove(&self, id_equipment: impl IdParam, id_script: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_script = require_id(&id_script, "Script id")?;
        self.client
            .delete(&format!("equipamentoroteiro/equipamento/{id_equipment}/roteiro/{id_script}/"))
            .await
    }
}

/// Credentials used to reach an equipment over one access protocol
#[derive(Debug, Clone)]
pub struct AccessCredentials {
    /// Host name or address
    pub fqdn: String,
    /// Login
    pub user: String,
    /// Login password
    pub password: SecretString,
    /// Privileged mode password
    pub enable_password: SecretString,
}

impl AccessCredentials {
    fn payload(&self, id_equipment: u64, id_access_type: u64) -> Value {
        json!({
            "equipamento_acesso": {
                "id_equipamento": id_equipment,
                "fqdn": self.fqdn,
                "user": self.user,
                "pass": self.password.expose_secret(),
                "id_tipo_acesso": id_access_type,
                "enable_pass": self.enable_password.expose_secret(),
            }
        })
    }
}

/// Equipment access (`equipamento_acesso`) façade
#[derive(Debug, Clone)]
pub struct EquipmentAccess {
    client: GenericClient,
}

impl EquipmentAccess {
    /// Create the façade over a shared client
    pub fn new(client: GenericClient) -> Self {
        Self { client }
    }

    /// List every access visible to the user
    pub async fn list_all(&self) -> Result<Value, NetworkApiError> {
        self.client
            .get("equipamentoacesso/", &["equipamento_acesso"])
            .await
    }

    /// List the accesses of a named equipment
    pub async fn list_by_equipment(&self, equipment_name: &str) -> Result<Value, NetworkApiError> {
        require_text(equipment_name, "Equipment name")?;
        self.client
            .get(
                &format!("equipamentoacesso/name/{}/", segment(equipment_name)),
                &["equipamento_acesso"],
            )
            .await
    }

    /// Register an access, returning its new id
    pub async fn insert(
        &self,
        id_equipment: impl IdParam,
        id_access_type: impl IdParam,
        credentials: &AccessCredentials,
    ) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_access_type = require_id(&id_access_type, "Access type id")?;
        require_text(&credentials.fqdn, "FQDN")?;
        let payload = credentials.payload(id_equipment, id_access_type);
        narrow(
            self.client.post("equipamentoacesso/", &payload, &[]).await?,
            "equipamento_acesso",
        )
    }

    /// Replace the credentials of an access
    pub async fn edit(
        &self,
        id_equipment: impl IdParam,
        id_access_type: impl IdParam,
        credentials: &AccessCredentials,
    ) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_access_type = require_id(&id_access_type, "Access type id")?;
        require_text(&credentials.fqdn, "FQDN")?;
        let payload = credentials.payload(id_equipment, id_access_type);
        self.client
            .put(&format!("equipamentoacesso/{id_equipment}/{id_access_type}/"), &payload, &[])
            .await
    }

    /// Remove an access
    pub async fn remove(&self, id_equipment: impl IdParam, id_access_type: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_equipment = require_id(&id_equipment, "Equipment id")?;
        let id_access_type = require_id(&id_access_type, "Access type id")?;
        self.client
            .delete(&format!("equipamentoacesso/{id_equipment}/{id_access_type}/"))
            .await
    }
}
