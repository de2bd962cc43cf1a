//! Legacy XML resources
//!
//! Every façade wraps a shared [`GenericClient`](crate::common::GenericClient):
//! requests are encoded under `<networkapi versao="1.0">`, responses come back
//! as [`serde_json::Value`] maps with string leaves, and server error codes
//! surface as [`NetworkApiError::Api`](crate::error::NetworkApiError::Api).

pub mod catalogue;
pub mod environment;
pub mod environment_vip;
pub mod equipment;
pub mod equipment_group;
pub mod event_log;
pub mod filter;
pub mod interface;
pub mod ip;
pub mod network;
pub mod permission;
pub mod rack;
pub mod user;
pub mod vip;
pub mod vlan;

pub use catalogue::{
    AccessCredentials, AccessType, Brand, DcDivision, EquipmentAccess, EquipmentScript, EquipmentType,
    GroupL3, LogicalEnvironment, Model, NetworkType, Script, ScriptType,
};
pub use environment::{Environment, EnvironmentRequest};
pub use environment_vip::{EnvironmentVip, EnvironmentVipRequest, OptionVip};
pub use equipment::{Equipment, EquipmentSearch};
pub use equipment_group::{EquipmentGroup, EquipmentGroupRights, Rights};
pub use event_log::{EventLog, EventLogSearch};
pub use filter::Filter;
pub use interface::{Interface, InterfaceRequest};
pub use ip::Ip;
pub use network::Network;
pub use permission::{AdministrativePermission, Permission};
pub use rack::{Rack, RackRequest};
pub use user::{GroupMembership, User, UserGroup};
pub use vip::{RealOperation, Vip, VipReal, VipRequest};
pub use vlan::{IpVersion, Vlan, VlanRequest, VlanSearch};
