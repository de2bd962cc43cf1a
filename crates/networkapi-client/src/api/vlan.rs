//! Vlan resources

use super::api_resource;

api_resource!(
    /// `api/v3/vlan/`
    ApiVlan, "api/v3/vlan/", "vlans"
);
