//! Entry point that hands out façades over one shared transport

use crate::api::{
    ApiAsn, ApiEnvironment, ApiEnvironmentVip, ApiEquipment, ApiInterface, ApiIpv4, ApiIpv6,
    ApiNetworkIpv4, ApiNetworkIpv6, ApiObjectGroupPermission, ApiPool, ApiVipRequest, ApiVlan,
};
use crate::common::{ApiClient, GenericClient};
use crate::config::ClientConfig;
use crate::error::NetworkApiError;
use crate::legacy::{
    AccessType, AdministrativePermission, Brand, DcDivision, Environment, EnvironmentVip, Equipment,
    EquipmentAccess, EquipmentGroup, EquipmentGroupRights, EquipmentScript, EquipmentType, EventLog,
    Filter, GroupL3, GroupMembership, Interface, Ip, LogicalEnvironment, Model, Network, NetworkType,
    OptionVip, Permission, Rack, Script, ScriptType, User, UserGroup, Vip, Vlan,
};
use crate::transport::{HttpTransport, Transport};
use std::sync::Arc;
use tracing::info;

macro_rules! factory_methods {
    ($client:ident => $($method:ident -> $facade:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create a [`", stringify!($facade), "`] façade")]
            pub fn $method(&self) -> $facade {
                $facade::new(self.$client())
            }
        )*
    };
}

/// Builds every NetworkAPI façade over a single transport
///
/// # Example
///
/// ```no_run
/// use networkapi_client::{ClientConfig, ClientFactory};
///
/// # async fn example() -> Result<(), networkapi_client::NetworkApiError> {
/// let factory = ClientFactory::new(ClientConfig::new("https://networkapi.example.com", "admin", "secret"))?;
/// let vlan = factory.create_vlan().get(42).await?;
/// println!("{}", vlan["nome"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ClientFactory {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ClientFactory {
    /// Create a factory with an HTTP transport built from `config`
    pub fn new(config: ClientConfig) -> Result<Self, NetworkApiError> {
        let transport = HttpTransport::new(&config)?;
        info!("NetworkAPI client configured for {}", config.url);
        Ok(Self::with_transport(config.url, Arc::new(transport)))
    }

    /// Create a factory over any transport (mocks, custom HTTP stacks)
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Client for the legacy XML resources
    pub fn generic_client(&self) -> GenericClient {
        GenericClient::new(self.base_url.clone(), Arc::clone(&self.transport))
    }

    /// Client for the v3/v4 JSON resources
    pub fn api_client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), Arc::clone(&self.transport))
    }

    factory_methods!(generic_client =>
        create_environment -> Environment,
        create_vlan -> Vlan,
        create_equipment -> Equipment,
        create_ip -> Ip,
        create_network -> Network,
        create_interface -> Interface,
        create_rack -> Rack,
        create_user -> User,
        create_user_group -> UserGroup,
        create_group_membership -> GroupMembership,
        create_equipment_group -> EquipmentGroup,
        create_equipment_group_rights -> EquipmentGroupRights,
        create_permission -> Permission,
        create_administrative_permission -> AdministrativePermission,
        create_brand -> Brand,
        create_model -> Model,
        create_equipment_type -> EquipmentType,
        create_network_type -> NetworkType,
        create_access_type -> AccessType,
        create_logical_environment -> LogicalEnvironment,
        create_dc_division -> DcDivision,
        create_group_l3 -> GroupL3,
        create_script_type -> ScriptType,
        create_script -> Script,
        create_equipment_script -> EquipmentScript,
        create_equipment_access -> EquipmentAccess,
        create_environment_vip -> EnvironmentVip,
        create_option_vip -> OptionVip,
        create_vip -> Vip,
        create_filter -> Filter,
        create_event_log -> EventLog,
    );

    factory_methods!(api_client =>
        create_api_environment -> ApiEnvironment,
        create_api_environment_vip -> ApiEnvironmentVip,
        create_api_vlan -> ApiVlan,
        create_api_network_ipv4 -> ApiNetworkIpv4,
        create_api_network_ipv6 -> ApiNetworkIpv6,
        create_api_ipv4 -> ApiIpv4,
        create_api_ipv6 -> ApiIpv6,
        create_api_equipment -> ApiEquipment,
        create_api_interface -> ApiInterface,
        create_api_pool -> ApiPool,
        create_api_vip_request -> ApiVipRequest,
        create_api_object_group_permission -> ApiObjectGroupPermission,
        create_api_asn -> ApiAsn,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;

    #[tokio::test]
    async fn test_facades_share_the_transport() {
        let mock = MockTransport::new();
        mock.push_xml("<vlan><id>1</id></vlan>");
        mock.push_xml("<ambiente><id>2</id></ambiente>");

        let factory = ClientFactory::with_transport("http://napi.test/", Arc::new(mock.clone()));
        factory.create_vlan().get(1).await.unwrap();
        factory.create_environment().get_by_id(2).await.unwrap();

        assert_eq!(mock.call_count(), 2);
        let urls: Vec<String> = mock.requests().into_iter().map(|request| request.url).collect();
        assert_eq!(urls, ["http://napi.test/vlan/1/", "http://napi.test/environment/id/2/"]);
    }

    #[test]
    fn test_new_builds_http_transport() {
        let factory = ClientFactory::new(ClientConfig::new("http://napi.test", "user", "pass")).unwrap();
        assert_eq!(factory.base_url(), "http://napi.test");
    }
}
