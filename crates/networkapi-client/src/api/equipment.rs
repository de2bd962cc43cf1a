//! Equipment, interface and AS resources (v4 paths)

use super::{ApiResource, api_resource};
use crate::error::NetworkApiError;
use crate::validation::{IdParam, require_id};
use serde_json::{Value, json};

api_resource!(
    /// `api/v4/equipment/`
    ApiEquipment, "api/v4/equipment/", "equipments"
);

api_resource!(
    /// `api/v4/interface/`
    ApiInterface, "api/v4/interface/", "interfaces"
);

impl ApiInterface {
    /// Connect two interfaces, `interface_a` on its front side
    pub async fn connect(&self, interface_a: &Value, interface_b: &Value) -> Result<Value, NetworkApiError> {
        let key = Self::KEY;
        let body = json!({ key: [interface_a, interface_b] });
        self.client().post("api/v4/interface/connections/", &body).await
    }

    /// Break the connection between two interfaces
    pub async fn disconnect(&self, id_interface_a: impl IdParam, id_interface_b: impl IdParam) -> Result<Value, NetworkApiError> {
        let id_a = require_id(&id_interface_a, "Interface id")?;
        let id_b = require_id(&id_interface_b, "Interface id")?;
        self.client()
            .delete(&format!("api/v4/interface/disconnect/{id_a}/{id_b}/"))
            .await
    }

    /// Environments configured on a switch port
    pub async fn environments(&self, id_interface: impl IdParam) -> Result<Value, NetworkApiError> {
        let id = require_id(&id_interface, "Interface id")?;
        self.client()
            .get(&format!("api/v3/interface/environments/{id}/"))
            .await
    }
}

api_resource!(
    /// `api/v4/as/`
    ApiAsn, "api/v4/as/", "asns"
);

impl ApiAsn {
    /// Associate an AS with equipment
    pub async fn associate(&self, asn_equipments: &[Value]) -> Result<Value, NetworkApiError> {
        self.client()
            .create_many("api/v4/as/equipment/", "asn_equipments", asn_equipments)
            .await
    }

    /// Dissociate an AS from equipment by association id
    pub async fn dissociate(&self, ids: &[u64]) -> Result<Value, NetworkApiError> {
        self.client().delete_many("api/v4/as/equipment/", ids).await
    }
}
