//! NetworkAPI error code table
//!
//! The legacy resources report failures as `<erro><codigo>N</codigo><descricao>..</descricao></erro>`
//! inside an HTTP 500 body. The code selects one [`ApiErrorKind`]; codes missing from
//! [`ERROR_CODES`] map to [`ApiErrorKind::Generic`].

use std::fmt;

/// Error family reported by the NetworkAPI server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// Failure accessing the data source
    DataBase,
    /// Failure reading the request XML
    Xml,
    /// Invalid value for a request field
    InvalidValue,
    /// Failure executing a script on the equipment
    ScriptExecution,
    /// Equipment type does not exist
    EquipmentTypeNotFound,
    /// Model does not exist
    ModelNotFound,
    /// Equipment group does not exist
    EquipmentGroupNotFound,
    /// An equipment with this name already exists
    EquipmentNameDuplicated,
    /// Equipment is already associated with the environment
    EquipmentEnvironmentDuplicated,
    /// Logical environment does not exist
    LogicalEnvironmentNotFound,
    /// Datacenter division does not exist
    DcDivisionNotFound,
    /// L3 group does not exist
    GroupL3NotFound,
    /// Environment does not exist
    EnvironmentNotFound,
    /// An environment with the same L3 group, logical environment and DC division already exists
    EnvironmentDuplicated,
    /// Environment is in use and cannot be removed
    EnvironmentInUse,
    /// Vlan does not exist
    VlanNotFound,
    /// A vlan with this name already exists in the environment
    VlanNameDuplicated,
    /// A vlan with this number already exists in the environment
    VlanNumberDuplicated,
    /// No vlan number available in the environment
    VlanNumberUnavailable,
    /// Vlan is not active
    VlanInactive,
    /// Vlan is already created on the equipment
    VlanAlreadyCreated,
    /// Vlan has networks or ips in use
    VlanInUse,
    /// Vlan access list file not found
    VlanAclNotFound,
    /// Network type does not exist
    NetworkTypeNotFound,
    /// A network type with this name already exists
    NetworkTypeDuplicated,
    /// Network type is associated with networks
    NetworkTypeInUse,
    /// IPv4 network does not exist
    NetworkIpv4NotFound,
    /// IPv6 network does not exist
    NetworkIpv6NotFound,
    /// No network address available in the environment
    NetworkUnavailable,
    /// Network has ips in use
    NetworkInUse,
    /// Network is already created on the equipment
    NetworkAlreadyCreated,
    /// Ip does not exist
    IpNotFound,
    /// No ip address available in the network
    IpUnavailable,
    /// Ip is not associated with the equipment
    IpEquipmentNotFound,
    /// Ip is already associated with the equipment
    IpEquipmentAlreadyAssociated,
    /// Ip is used by a vip request
    IpInUseByVip,
    /// Ip address does not belong to the network
    IpNotInNetwork,
    /// Equipment does not exist
    EquipmentNotFound,
    /// An equipment type with this name already exists
    EquipmentTypeDuplicated,
    /// An equipment group with this name already exists
    EquipmentGroupDuplicated,
    /// Equipment is not associated with the group
    EquipmentGroupAssociationNotFound,
    /// Equipment is already associated with the group
    EquipmentGroupAssociationDuplicated,
    /// Equipment must belong to at least one group
    EquipmentGroupLastAssociation,
    /// Equipment is not associated with the environment
    EquipmentEnvironmentNotFound,
    /// Equipment access does not exist
    EquipmentAccessNotFound,
    /// Equipment access already registered for this protocol
    EquipmentAccessDuplicated,
    /// Equipment script association does not exist
    EquipmentScriptNotFound,
    /// Equipment is already associated with the script
    EquipmentScriptDuplicated,
    /// Brand does not exist
    BrandNotFound,
    /// A brand with this name already exists
    BrandDuplicated,
    /// Brand has associated models
    BrandInUse,
    /// A model with this name already exists for the brand
    ModelDuplicated,
    /// Model has associated equipment
    ModelInUse,
    /// Access type does not exist
    AccessTypeNotFound,
    /// An access type with this protocol already exists
    AccessTypeDuplicated,
    /// Access type has associated equipment access
    AccessTypeInUse,
    /// Script type does not exist
    ScriptTypeNotFound,
    /// A script type with this name already exists
    ScriptTypeDuplicated,
    /// Script type has associated scripts
    ScriptTypeInUse,
    /// Script does not exist
    ScriptNotFound,
    /// A script with this name already exists
    ScriptDuplicated,
    /// Script has associated equipment
    ScriptInUse,
    /// A logical environment with this name already exists
    LogicalEnvironmentDuplicated,
    /// Logical environment has associated environments
    LogicalEnvironmentInUse,
    /// A datacenter division with this name already exists
    DcDivisionDuplicated,
    /// Datacenter division has associated environments
    DcDivisionInUse,
    /// An L3 group with this name already exists
    GroupL3Duplicated,
    /// L3 group has associated environments
    GroupL3InUse,
    /// Interface does not exist
    InterfaceNotFound,
    /// An interface with this name already exists on the equipment
    InterfaceNameDuplicated,
    /// Invalid front/back interface connection
    InterfaceInvalidConnection,
    /// Interface is connected to another interface
    InterfaceInUse,
    /// Interface is protected
    InterfaceProtected,
    /// User does not exist
    UserNotFound,
    /// A user with this login already exists
    UserDuplicated,
    /// User group does not exist
    UserGroupNotFound,
    /// A user group with this name already exists
    UserGroupDuplicated,
    /// User is not associated with the group
    UserGroupAssociationNotFound,
    /// User is already associated with the group
    UserGroupAssociationDuplicated,
    /// User could not be authenticated
    UserNotAuthenticated,
    /// User is not authorized for the operation
    UserNotAuthorized,
    /// LDAP user does not exist
    LdapUserNotFound,
    /// Permission does not exist
    PermissionNotFound,
    /// Administrative permission does not exist
    AdministrativePermissionNotFound,
    /// Group already has this administrative permission
    AdministrativePermissionDuplicated,
    /// Equipment group rights do not exist
    EquipmentGroupRightsNotFound,
    /// User group already has rights for the equipment group
    EquipmentGroupRightsDuplicated,
    /// Environment vip does not exist
    EnvironmentVipNotFound,
    /// An environment vip with the same finality, client and environment already exists
    EnvironmentVipDuplicated,
    /// Environment vip has associated networks
    EnvironmentVipInUse,
    /// Option vip does not exist
    OptionVipNotFound,
    /// Option vip is already associated with the environment vip
    OptionVipDuplicated,
    /// Option vip is not associated with the environment vip
    OptionVipEnvironmentVipNotFound,
    /// Option vip is used by vip requests
    OptionVipInUse,
    /// Vip request does not exist
    VipNotFound,
    /// Vip request has not been validated
    VipNotValidated,
    /// Vip request is already created
    VipAlreadyCreated,
    /// Vip request has not been created
    VipNotCreated,
    /// Invalid healthcheck for the vip request
    VipInvalidHealthcheck,
    /// Real server is not associated with the vip request
    RealServerNotFound,
    /// Healthcheck expect does not exist
    HealthcheckExpectNotFound,
    /// Filter does not exist
    FilterNotFound,
    /// A filter with this name already exists
    FilterDuplicated,
    /// Filter is associated with environments
    FilterInUse,
    /// Filter is already associated with the equipment type
    FilterEquipmentTypeDuplicated,
    /// Rack does not exist
    RackNotFound,
    /// A rack with this number already exists
    RackNumberDuplicated,
    /// A rack with this name already exists
    RackNameDuplicated,
    /// Failure generating the rack configuration
    RackConfigError,
    /// Vlan number is outside the environment's range
    VlanNumberOutOfRange,
    /// Vlan is not created on the equipment
    VlanNotCreated,
    /// Network address overlaps an existing network
    NetworkAddressConflict,
    /// Network is not created on the equipment
    NetworkNotCreated,
    /// Ip address is already registered in the network
    IpDuplicated,
    /// Equipment is in use and cannot be removed
    EquipmentInUse,
    /// Equipment type is associated with equipment
    EquipmentTypeInUse,
    /// Equipment group has equipment or rights associated
    EquipmentGroupInUse,
    /// Equipment is in maintenance
    EquipmentMaintenance,
    /// Interface is not associated with the environment
    InterfaceEnvironmentNotFound,
    /// Interface is already associated with the environment
    InterfaceEnvironmentDuplicated,
    /// Environment configuration does not exist
    EnvironmentConfigurationNotFound,
    /// Environment configuration already exists
    EnvironmentConfigurationDuplicated,
    /// Healthcheck expect already exists in the environment
    HealthcheckExpectDuplicated,
    /// Real server is already associated with the vip
    RealServerDuplicated,
    /// Invalid vip port
    VipInvalidPort,
    /// Server pool does not exist
    PoolNotFound,
    /// A server pool with this identifier already exists
    PoolDuplicated,
    /// Server pool is associated with a vip
    PoolInUse,
    /// Server pool member does not exist
    PoolMemberNotFound,
    /// Server pool is deployed
    PoolDeployed,
    /// Server pool is not deployed
    PoolNotDeployed,
    /// Vrf does not exist
    VrfNotFound,
    /// Vrf is associated with environments or equipment
    VrfInUse,
    /// AS number does not exist
    AsnNotFound,
    /// AS number is associated with equipment
    AsnInUse,
    /// Object group permission does not exist
    ObjectGroupPermissionNotFound,
    /// Object group permission already exists
    ObjectGroupPermissionDuplicated,
    /// Template does not exist
    TemplateNotFound,
    /// User group has users or permissions associated
    UserGroupInUse,
    /// Invalid password
    UserPasswordInvalid,
    /// User is inactive
    UserInactive,
    /// LDAP server is unavailable
    LdapUnavailable,
    /// Equipment type is not associated with the filter
    FilterEquipmentTypeNotFound,
    /// Option vip is already associated with the environment vip
    OptionVipEnvironmentVipDuplicated,
    /// Invalid period for the event log search
    EventLogInvalidPeriod,
    /// Invalid parameter
    InvalidParameter,
    /// Code not present in the table
    Generic,
}

impl ApiErrorKind {
    /// Look up the error family for a server code
    pub fn from_code(code: u32) -> Option<Self> {
        ERROR_CODES
            .binary_search_by_key(&code, |(c, _)| *c)
            .ok()
            .map(|idx| ERROR_CODES[idx].1)
    }

    /// Short English description of the error family
    pub fn message(self) -> &'static str {
        match self {
            Self::DataBase => "Failure accessing the data source",
            Self::Xml => "Failure reading the request XML",
            Self::InvalidValue => "Invalid value for a request field",
            Self::ScriptExecution => "Failure executing a script on the equipment",
            Self::EquipmentTypeNotFound => "Equipment type does not exist",
            Self::ModelNotFound => "Model does not exist",
            Self::EquipmentGroupNotFound => "Equipment group does not exist",
            Self::EquipmentNameDuplicated => "An equipment with this name already exists",
            Self::EquipmentEnvironmentDuplicated => "Equipment is already associated with the environment",
            Self::LogicalEnvironmentNotFound => "Logical environment does not exist",
            Self::DcDivisionNotFound => "Datacenter division does not exist",
            Self::GroupL3NotFound => "L3 group does not exist",
            Self::EnvironmentNotFound => "Environment does not exist",
            Self::EnvironmentDuplicated => "An environment with the same L3 group, logical environment and DC division already exists",
            Self::EnvironmentInUse => "Environment is in use and cannot be removed",
            Self::VlanNotFound => "Vlan does not exist",
            Self::VlanNameDuplicated => "A vlan with this name already exists in the environment",
            Self::VlanNumberDuplicated => "A vlan with this number already exists in the environment",
            Self::VlanNumberUnavailable => "No vlan number available in the environment",
            Self::VlanInactive => "Vlan is not active",
            Self::VlanAlreadyCreated => "Vlan is already created on the equipment",
            Self::VlanInUse => "Vlan has networks or ips in use",
            Self::VlanAclNotFound => "Vlan access list file not found",
            Self::NetworkTypeNotFound => "Network type does not exist",
            Self::NetworkTypeDuplicated => "A network type with this name already exists",
            Self::NetworkTypeInUse => "Network type is associated with networks",
            Self::NetworkIpv4NotFound => "IPv4 network does not exist",
            Self::NetworkIpv6NotFound => "IPv6 network does not exist",
            Self::NetworkUnavailable => "No network address available in the environment",
            Self::NetworkInUse => "Network has ips in use",
            Self::NetworkAlreadyCreated => "Network is already created on the equipment",
            Self::IpNotFound => "Ip does not exist",
            Self::IpUnavailable => "No ip address available in the network",
            Self::IpEquipmentNotFound => "Ip is not associated with the equipment",
            Self::IpEquipmentAlreadyAssociated => "Ip is already associated with the equipment",
            Self::IpInUseByVip => "Ip is used by a vip request",
            Self::IpNotInNetwork => "Ip address does not belong to the network",
            Self::EquipmentNotFound => "Equipment does not exist",
            Self::EquipmentTypeDuplicated => "An equipment type with this name already exists",
            Self::EquipmentGroupDuplicated => "An equipment group with this name already exists",
            Self::EquipmentGroupAssociationNotFound => "Equipment is not associated with the group",
            Self::EquipmentGroupAssociationDuplicated => "Equipment is already associated with the group",
            Self::EquipmentGroupLastAssociation => "Equipment must belong to at least one group",
            Self::EquipmentEnvironmentNotFound => "Equipment is not associated with the environment",
            Self::EquipmentAccessNotFound => "Equipment access does not exist",
            Self::EquipmentAccessDuplicated => "Equipment access already registered for this protocol",
            Self::EquipmentScriptNotFound => "Equipment script association does not exist",
            Self::EquipmentScriptDuplicated => "Equipment is already associated with the script",
            Self::BrandNotFound => "Brand does not exist",
            Self::BrandDuplicated => "A brand with this name already exists",
            Self::BrandInUse => "Brand has associated models",
            Self::ModelDuplicated => "A model with this name already exists for the brand",
            Self::ModelInUse => "Model has associated equipment",
            Self::AccessTypeNotFound => "Access type does not exist",
            Self::AccessTypeDuplicated => "An access type with this protocol already exists",
            Self::AccessTypeInUse => "Access type has associated equipment access",
            Self::ScriptTypeNotFound => "Script type does not exist",
            Self::ScriptTypeDuplicated => "A script type with this name already exists",
            Self::ScriptTypeInUse => "Script type has associated scripts",
            Self::ScriptNotFound => "Script does not exist",
            Self::ScriptDuplicated => "A script with this name already exists",
            Self::ScriptInUse => "Script has associated equipment",
            Self::LogicalEnvironmentDuplicated => "A logical environment with this name already exists",
            Self::LogicalEnvironmentInUse => "Logical environment has associated environments",
            Self::DcDivisionDuplicated => "A datacenter division with this name already exists",
            Self::DcDivisionInUse => "Datacenter division has associated environments",
            Self::GroupL3Duplicated => "An L3 group with this name already exists",
            Self::GroupL3InUse => "L3 group has associated environments",
            Self::InterfaceNotFound => "Interface does not exist",
            Self::InterfaceNameDuplicated => "An interface with this name already exists on the equipment",
            Self::InterfaceInvalidConnection => "Invalid front/back interface connection",
            Self::InterfaceInUse => "Interface is connected to another interface",
            Self::InterfaceProtected => "Interface is protected",
            Self::UserNotFound => "User does not exist",
            Self::UserDuplicated => "A user with this login already exists",
            Self::UserGroupNotFound => "User group does not exist",
            Self::UserGroupDuplicated => "A user group with this name already exists",
            Self::UserGroupAssociationNotFound => "User is not associated with the group",
            Self::UserGroupAssociationDuplicated => "User is already associated with the group",
            Self::UserNotAuthenticated => "User could not be authenticated",
            Self::UserNotAuthorized => "User is not authorized for the operation",
            Self::LdapUserNotFound => "LDAP user does not exist",
            Self::PermissionNotFound => "Permission does not exist",
            Self::AdministrativePermissionNotFound => "Administrative permission does not exist",
            Self::AdministrativePermissionDuplicated => "Group already has this administrative permission",
            Self::EquipmentGroupRightsNotFound => "Equipment group rights do not exist",
            Self::EquipmentGroupRightsDuplicated => "User group already has rights for the equipment group",
            Self::EnvironmentVipNotFound => "Environment vip does not exist",
            Self::EnvironmentVipDuplicated => "An environment vip with the same finality, client and environment already exists",
            Self::EnvironmentVipInUse => "Environment vip has associated networks",
            Self::OptionVipNotFound => "Option vip does not exist",
            Self::OptionVipDuplicated => "Option vip is already associated with the environment vip",
            Self::OptionVipEnvironmentVipNotFound => "Option vip is not associated with the environment vip",
            Self::OptionVipInUse => "Option vip is used by vip requests",
            Self::VipNotFound => "Vip request does not exist",
            Self::VipNotValidated => "Vip request has not been validated",
            Self::VipAlreadyCreated => "Vip request is already created",
            Self::VipNotCreated => "Vip request has not been created",
            Self::VipInvalidHealthcheck => "Invalid healthcheck for the vip request",
            Self::RealServerNotFound => "Real server is not associated with the vip request",
            Self::HealthcheckExpectNotFound => "Healthcheck expect does not exist",
            Self::FilterNotFound => "Filter does not exist",
            Self::FilterDuplicated => "A filter with this name already exists",
            Self::FilterInUse => "Filter is associated with environments",
            Self::FilterEquipmentTypeDuplicated => "Filter is already associated with the equipment type",
            Self::RackNotFound => "Rack does not exist",
            Self::RackNumberDuplicated => "A rack with this number already exists",
            Self::RackNameDuplicated => "A rack with this name already exists",
            Self::RackConfigError => "Failure generating the rack configuration",
            Self::VlanNumberOutOfRange => "Vlan number is outside the environment's range",
            Self::VlanNotCreated => "Vlan is not created on the equipment",
            Self::NetworkAddressConflict => "Network address overlaps an existing network",
            Self::NetworkNotCreated => "Network is not created on the equipment",
            Self::IpDuplicated => "Ip address is already registered in the network",
            Self::EquipmentInUse => "Equipment is in use and cannot be removed",
            Self::EquipmentTypeInUse => "Equipment type is associated with equipment",
            Self::EquipmentGroupInUse => "Equipment group has equipment or rights associated",
            Self::EquipmentMaintenance => "Equipment is in maintenance",
            Self::InterfaceEnvironmentNotFound => "Interface is not associated with the environment",
            Self::InterfaceEnvironmentDuplicated => "Interface is already associated with the environment",
            Self::EnvironmentConfigurationNotFound => "Environment configuration does not exist",
            Self::EnvironmentConfigurationDuplicated => "Environment configuration already exists",
            Self::HealthcheckExpectDuplicated => "Healthcheck expect already exists in the environment",
            Self::RealServerDuplicated => "Real server is already associated with the vip",
            Self::VipInvalidPort => "Invalid vip port",
            Self::PoolNotFound => "Server pool does not exist",
            Self::PoolDuplicated => "A server pool with this identifier already exists",
            Self::PoolInUse => "Server pool is associated with a vip",
            Self::PoolMemberNotFound => "Server pool member does not exist",
            Self::PoolDeployed => "Server pool is deployed",
            Self::PoolNotDeployed => "Server pool is not deployed",
            Self::VrfNotFound => "Vrf does not exist",
            Self::VrfInUse => "Vrf is associated with environments or equipment",
            Self::AsnNotFound => "AS number does not exist",
            Self::AsnInUse => "AS number is associated with equipment",
            Self::ObjectGroupPermissionNotFound => "Object group permission does not exist",
            Self::ObjectGroupPermissionDuplicated => "Object group permission already exists",
            Self::TemplateNotFound => "Template does not exist",
            Self::UserGroupInUse => "User group has users or permissions associated",
            Self::UserPasswordInvalid => "Invalid password",
            Self::UserInactive => "User is inactive",
            Self::LdapUnavailable => "LDAP server is unavailable",
            Self::FilterEquipmentTypeNotFound => "Equipment type is not associated with the filter",
            Self::OptionVipEnvironmentVipDuplicated => "Option vip is already associated with the environment vip",
            Self::EventLogInvalidPeriod => "Invalid period for the event log search",
            Self::InvalidParameter => "Invalid parameter",
            Self::Generic => "NetworkAPI client error",
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Server error codes, sorted by code
pub static ERROR_CODES: &[(u32, ApiErrorKind)] = &[
    (1, ApiErrorKind::DataBase),
    (2, ApiErrorKind::InvalidValue),
    (3, ApiErrorKind::Xml),
    (4, ApiErrorKind::InvalidValue),
    (5, ApiErrorKind::InvalidValue),
    (6, ApiErrorKind::InvalidValue),
    (7, ApiErrorKind::ScriptExecution),
    (100, ApiErrorKind::EquipmentTypeNotFound),
    (101, ApiErrorKind::ModelNotFound),
    (102, ApiErrorKind::EquipmentGroupNotFound),
    (103, ApiErrorKind::LogicalEnvironmentNotFound),
    (104, ApiErrorKind::DcDivisionNotFound),
    (105, ApiErrorKind::GroupL3NotFound),
    (106, ApiErrorKind::EnvironmentDuplicated),
    (107, ApiErrorKind::VlanNumberDuplicated),
    (108, ApiErrorKind::VlanNameDuplicated),
    (109, ApiErrorKind::VlanNumberUnavailable),
    (110, ApiErrorKind::VlanNumberOutOfRange),
    (111, ApiErrorKind::NetworkTypeNotFound),
    (112, ApiErrorKind::EnvironmentNotFound),
    (113, ApiErrorKind::InvalidValue),
    (114, ApiErrorKind::IpDuplicated),
    (115, ApiErrorKind::NetworkIpv4NotFound),
    (116, ApiErrorKind::VlanNotFound),
    (117, ApiErrorKind::EquipmentNotFound),
    (118, ApiErrorKind::IpEquipmentNotFound),
    (119, ApiErrorKind::IpNotFound),
    (120, ApiErrorKind::IpEquipmentAlreadyAssociated),
    (121, ApiErrorKind::EquipmentInUse),
    (122, ApiErrorKind::VlanInactive),
    (123, ApiErrorKind::VlanAlreadyCreated),
    (124, ApiErrorKind::HealthcheckExpectNotFound),
    (125, ApiErrorKind::HealthcheckExpectDuplicated),
    (126, ApiErrorKind::InterfaceInvalidConnection),
    (127, ApiErrorKind::InterfaceInvalidConnection),
    (128, ApiErrorKind::InterfaceInvalidConnection),
    (129, ApiErrorKind::InterfaceInvalidConnection),
    (130, ApiErrorKind::VlanInUse),
    (131, ApiErrorKind::EquipmentEnvironmentNotFound),
    (132, ApiErrorKind::InterfaceEnvironmentNotFound),
    (133, ApiErrorKind::InterfaceEnvironmentDuplicated),
    (134, ApiErrorKind::NetworkAddressConflict),
    (135, ApiErrorKind::NetworkAddressConflict),
    (136, ApiErrorKind::VlanNameDuplicated),
    (137, ApiErrorKind::VlanNumberOutOfRange),
    (138, ApiErrorKind::EnvironmentConfigurationNotFound),
    (139, ApiErrorKind::EnvironmentConfigurationDuplicated),
    (140, ApiErrorKind::InvalidValue),
    (141, ApiErrorKind::InterfaceNotFound),
    (142, ApiErrorKind::IpInUseByVip),
    (143, ApiErrorKind::IpNotInNetwork),
    (144, ApiErrorKind::IpDuplicated),
    (145, ApiErrorKind::NetworkIpv4NotFound),
    (146, ApiErrorKind::NetworkIpv6NotFound),
    (147, ApiErrorKind::VrfNotFound),
    (148, ApiErrorKind::VrfInUse),
    (149, ApiErrorKind::EquipmentNameDuplicated),
    (150, ApiErrorKind::IpUnavailable),
    (151, ApiErrorKind::NetworkUnavailable),
    (152, ApiErrorKind::VipNotFound),
    (153, ApiErrorKind::NetworkUnavailable),
    (154, ApiErrorKind::VipInvalidPort),
    (155, ApiErrorKind::VipInvalidHealthcheck),
    (156, ApiErrorKind::EquipmentEnvironmentDuplicated),
    (157, ApiErrorKind::EquipmentNotFound),
    (158, ApiErrorKind::ScriptTypeNotFound),
    (159, ApiErrorKind::EquipmentScriptNotFound),
    (160, ApiErrorKind::GroupL3NotFound),
    (161, ApiErrorKind::GroupL3InUse),
    (162, ApiErrorKind::LogicalEnvironmentNotFound),
    (163, ApiErrorKind::LogicalEnvironmentInUse),
    (164, ApiErrorKind::DcDivisionNotFound),
    (165, ApiErrorKind::ScriptNotFound),
    (166, ApiErrorKind::ScriptDuplicated),
    (167, ApiErrorKind::BrandNotFound),
    (168, ApiErrorKind::ModelNotFound),
    (169, ApiErrorKind::GroupL3Duplicated),
    (170, ApiErrorKind::EquipmentGroupInUse),
    (171, ApiErrorKind::EquipmentGroupAssociationDuplicated),
    (172, ApiErrorKind::AccessTypeNotFound),
    (173, ApiErrorKind::LogicalEnvironmentDuplicated),
    (174, ApiErrorKind::AccessTypeInUse),
    (175, ApiErrorKind::DcDivisionDuplicated),
    (176, ApiErrorKind::EquipmentAccessNotFound),
    (177, ApiErrorKind::UserNotFound),
    (178, ApiErrorKind::UserGroupDuplicated),
    (179, ApiErrorKind::UserDuplicated),
    (180, ApiErrorKind::UserGroupNotFound),
    (181, ApiErrorKind::EquipmentScriptDuplicated),
    (182, ApiErrorKind::InterfaceProtected),
    (183, ApiErrorKind::NetworkInUse),
    (184, ApiErrorKind::UserGroupAssociationNotFound),
    (185, ApiErrorKind::EquipmentGroupAssociationNotFound),
    (186, ApiErrorKind::UserGroupAssociationDuplicated),
    (187, ApiErrorKind::InterfaceNameDuplicated),
    (188, ApiErrorKind::AdministrativePermissionDuplicated),
    (189, ApiErrorKind::AdministrativePermissionNotFound),
    (190, ApiErrorKind::EquipmentScriptNotFound),
    (191, ApiErrorKind::VipNotValidated),
    (192, ApiErrorKind::VipAlreadyCreated),
    (193, ApiErrorKind::ScriptTypeDuplicated),
    (194, ApiErrorKind::VipNotFound),
    (195, ApiErrorKind::VipAlreadyCreated),
    (196, ApiErrorKind::VipNotCreated),
    (197, ApiErrorKind::ScriptTypeInUse),
    (198, ApiErrorKind::ScriptInUse),
    (199, ApiErrorKind::BrandInUse),
    (200, ApiErrorKind::ModelNotFound),
    (201, ApiErrorKind::BrandNotFound),
    (202, ApiErrorKind::ModelInUse),
    (203, ApiErrorKind::AccessTypeDuplicated),
    (204, ApiErrorKind::AccessTypeNotFound),
    (205, ApiErrorKind::UserNotFound),
    (206, ApiErrorKind::UserGroupNotFound),
    (207, ApiErrorKind::EquipmentGroupNotFound),
    (208, ApiErrorKind::EquipmentAccessDuplicated),
    (209, ApiErrorKind::EquipmentScriptDuplicated),
    (210, ApiErrorKind::IpEquipmentAlreadyAssociated),
    (211, ApiErrorKind::IpEquipmentNotFound),
    (212, ApiErrorKind::EquipmentGroupAssociationNotFound),
    (213, ApiErrorKind::EquipmentGroupLastAssociation),
    (214, ApiErrorKind::InterfaceInUse),
    (215, ApiErrorKind::NetworkTypeInUse),
    (216, ApiErrorKind::LogicalEnvironmentInUse),
    (217, ApiErrorKind::EnvironmentInUse),
    (218, ApiErrorKind::DcDivisionInUse),
    (219, ApiErrorKind::EnvironmentDuplicated),
    (220, ApiErrorKind::EnvironmentInUse),
    (221, ApiErrorKind::EnvironmentConfigurationNotFound),
    (222, ApiErrorKind::GroupL3InUse),
    (223, ApiErrorKind::VlanNotFound),
    (224, ApiErrorKind::VlanInUse),
    (225, ApiErrorKind::NetworkInUse),
    (226, ApiErrorKind::NetworkIpv6NotFound),
    (227, ApiErrorKind::IpInUseByVip),
    (228, ApiErrorKind::EquipmentInUse),
    (229, ApiErrorKind::InterfaceInUse),
    (230, ApiErrorKind::UserGroupInUse),
    (232, ApiErrorKind::AdministrativePermissionNotFound),
    (233, ApiErrorKind::PermissionNotFound),
    (234, ApiErrorKind::EquipmentGroupRightsNotFound),
    (235, ApiErrorKind::EquipmentGroupRightsDuplicated),
    (236, ApiErrorKind::AccessTypeInUse),
    (237, ApiErrorKind::ScriptInUse),
    (238, ApiErrorKind::ScriptTypeInUse),
    (239, ApiErrorKind::ModelInUse),
    (240, ApiErrorKind::BrandInUse),
    (241, ApiErrorKind::EquipmentTypeInUse),
    (242, ApiErrorKind::EquipmentAccessDuplicated),
    (243, ApiErrorKind::EquipmentAccessNotFound),
    (244, ApiErrorKind::EquipmentScriptNotFound),
    (245, ApiErrorKind::RealServerNotFound),
    (246, ApiErrorKind::RealServerDuplicated),
    (247, ApiErrorKind::VipInvalidPort),
    (248, ApiErrorKind::VipInvalidHealthcheck),
    (249, ApiErrorKind::HealthcheckExpectNotFound),
    (250, ApiErrorKind::ScriptDuplicated),
    (251, ApiErrorKind::BrandDuplicated),
    (252, ApiErrorKind::ModelDuplicated),
    (253, ApiErrorKind::NetworkTypeDuplicated),
    (254, ApiErrorKind::EquipmentGroupDuplicated),
    (255, ApiErrorKind::UserGroupDuplicated),
    (256, ApiErrorKind::UserDuplicated),
    (257, ApiErrorKind::AdministrativePermissionDuplicated),
    (258, ApiErrorKind::EquipmentGroupRightsNotFound),
    (259, ApiErrorKind::EquipmentGroupRightsDuplicated),
    (260, ApiErrorKind::UserGroupAssociationNotFound),
    (261, ApiErrorKind::UserGroupAssociationDuplicated),
    (262, ApiErrorKind::EquipmentGroupAssociationDuplicated),
    (263, ApiErrorKind::EquipmentGroupLastAssociation),
    (264, ApiErrorKind::InterfaceNotFound),
    (265, ApiErrorKind::InterfaceNameDuplicated),
    (266, ApiErrorKind::InterfaceInvalidConnection),
    (267, ApiErrorKind::EquipmentGroupRightsDuplicated),
    (268, ApiErrorKind::InterfaceProtected),
    (269, ApiErrorKind::InvalidParameter),
    (270, ApiErrorKind::InvalidParameter),
    (271, ApiErrorKind::InvalidValue),
    (272, ApiErrorKind::NetworkUnavailable),
    (273, ApiErrorKind::IpUnavailable),
    (274, ApiErrorKind::VlanNumberUnavailable),
    (275, ApiErrorKind::NetworkTypeNotFound),
    (276, ApiErrorKind::NetworkTypeDuplicated),
    (277, ApiErrorKind::NetworkTypeInUse),
    (278, ApiErrorKind::NetworkAddressConflict),
    (279, ApiErrorKind::NetworkAlreadyCreated),
    (280, ApiErrorKind::NetworkNotCreated),
    (281, ApiErrorKind::NetworkIpv4NotFound),
    (282, ApiErrorKind::NetworkIpv4NotFound),
    (283, ApiErrorKind::EnvironmentVipNotFound),
    (284, ApiErrorKind::EnvironmentVipNotFound),
    (285, ApiErrorKind::EnvironmentVipDuplicated),
    (286, ApiErrorKind::NetworkIpv6NotFound),
    (287, ApiErrorKind::EnvironmentVipInUse),
    (288, ApiErrorKind::EnvironmentVipDuplicated),
    (289, ApiErrorKind::OptionVipNotFound),
    (290, ApiErrorKind::IpNotInNetwork),
    (291, ApiErrorKind::IpNotInNetwork),
    (292, ApiErrorKind::IpDuplicated),
    (293, ApiErrorKind::VlanInUse),
    (294, ApiErrorKind::VlanInactive),
    (295, ApiErrorKind::VlanAlreadyCreated),
    (296, ApiErrorKind::VlanAclNotFound),
    (297, ApiErrorKind::VlanNotCreated),
    (298, ApiErrorKind::OptionVipDuplicated),
    (299, ApiErrorKind::OptionVipEnvironmentVipNotFound),
    (300, ApiErrorKind::EquipmentTypeDuplicated),
    (301, ApiErrorKind::EquipmentTypeNotFound),
    (302, ApiErrorKind::EquipmentTypeInUse),
    (303, ApiErrorKind::EquipmentAccessNotFound),
    (304, ApiErrorKind::LdapUserNotFound),
    (305, ApiErrorKind::UserNotAuthenticated),
    (306, ApiErrorKind::UserNotAuthorized),
    (307, ApiErrorKind::UserPasswordInvalid),
    (308, ApiErrorKind::UserInactive),
    (309, ApiErrorKind::LdapUnavailable),
    (310, ApiErrorKind::VlanAclNotFound),
    (311, ApiErrorKind::VlanAclNotFound),
    (312, ApiErrorKind::VlanInUse),
    (313, ApiErrorKind::VlanNameDuplicated),
    (314, ApiErrorKind::VlanNumberOutOfRange),
    (315, ApiErrorKind::VlanNumberDuplicated),
    (316, ApiErrorKind::VlanNumberUnavailable),
    (317, ApiErrorKind::NetworkUnavailable),
    (318, ApiErrorKind::NetworkAddressConflict),
    (319, ApiErrorKind::NetworkIpv6NotFound),
    (320, ApiErrorKind::IpNotFound),
    (321, ApiErrorKind::IpUnavailable),
    (322, ApiErrorKind::VipNotCreated),
    (323, ApiErrorKind::VipNotValidated),
    (324, ApiErrorKind::NetworkInUse),
    (325, ApiErrorKind::RealServerNotFound),
    (326, ApiErrorKind::VipInvalidHealthcheck),
    (327, ApiErrorKind::RealServerNotFound),
    (328, ApiErrorKind::RealServerDuplicated),
    (329, ApiErrorKind::VipInvalidPort),
    (330, ApiErrorKind::PoolNotFound),
    (331, ApiErrorKind::PoolDuplicated),
    (332, ApiErrorKind::PoolInUse),
    (333, ApiErrorKind::PoolMemberNotFound),
    (334, ApiErrorKind::PoolDeployed),
    (335, ApiErrorKind::PoolNotDeployed),
    (336, ApiErrorKind::IpInUseByVip),
    (337, ApiErrorKind::VipNotFound),
    (338, ApiErrorKind::VipAlreadyCreated),
    (339, ApiErrorKind::FilterNotFound),
    (340, ApiErrorKind::FilterNotFound),
    (341, ApiErrorKind::FilterDuplicated),
    (342, ApiErrorKind::FilterInUse),
    (343, ApiErrorKind::FilterEquipmentTypeDuplicated),
    (344, ApiErrorKind::FilterDuplicated),
    (345, ApiErrorKind::FilterEquipmentTypeDuplicated),
    (346, ApiErrorKind::FilterEquipmentTypeNotFound),
    (347, ApiErrorKind::EquipmentTypeNotFound),
    (348, ApiErrorKind::EnvironmentInUse),
    (349, ApiErrorKind::EnvironmentNotFound),
    (350, ApiErrorKind::PermissionNotFound),
    (351, ApiErrorKind::FilterInUse),
    (352, ApiErrorKind::PermissionNotFound),
    (353, ApiErrorKind::AdministrativePermissionNotFound),
    (354, ApiErrorKind::OptionVipNotFound),
    (355, ApiErrorKind::OptionVipDuplicated),
    (356, ApiErrorKind::OptionVipInUse),
    (357, ApiErrorKind::OptionVipEnvironmentVipNotFound),
    (358, ApiErrorKind::OptionVipEnvironmentVipDuplicated),
    (359, ApiErrorKind::OptionVipNotFound),
    (360, ApiErrorKind::OptionVipInUse),
    (361, ApiErrorKind::EnvironmentVipInUse),
    (362, ApiErrorKind::NetworkAlreadyCreated),
    (363, ApiErrorKind::NetworkAlreadyCreated),
    (364, ApiErrorKind::NetworkNotCreated),
    (365, ApiErrorKind::VlanNotCreated),
    (366, ApiErrorKind::VlanAlreadyCreated),
    (367, ApiErrorKind::VlanNotFound),
    (368, ApiErrorKind::VlanInactive),
    (369, ApiErrorKind::EquipmentNotFound),
    (370, ApiErrorKind::InterfaceNotFound),
    (371, ApiErrorKind::InterfaceEnvironmentNotFound),
    (372, ApiErrorKind::InterfaceEnvironmentDuplicated),
    (373, ApiErrorKind::EnvironmentConfigurationNotFound),
    (374, ApiErrorKind::EnvironmentConfigurationDuplicated),
    (375, ApiErrorKind::TemplateNotFound),
    (376, ApiErrorKind::RackNotFound),
    (377, ApiErrorKind::RackNumberDuplicated),
    (378, ApiErrorKind::RackNumberDuplicated),
    (379, ApiErrorKind::RackNotFound),
    (380, ApiErrorKind::RackNameDuplicated),
    (381, ApiErrorKind::RackConfigError),
    (382, ApiErrorKind::RackConfigError),
    (383, ApiErrorKind::RackConfigError),
    (384, ApiErrorKind::RackConfigError),
    (385, ApiErrorKind::RackNotFound),
    (386, ApiErrorKind::EnvironmentNotFound),
    (387, ApiErrorKind::VrfNotFound),
    (388, ApiErrorKind::VrfInUse),
    (389, ApiErrorKind::RackConfigError),
    (390, ApiErrorKind::RackConfigError),
    (391, ApiErrorKind::RackConfigError),
    (392, ApiErrorKind::RackNameDuplicated),
    (393, ApiErrorKind::AsnNotFound),
    (394, ApiErrorKind::AsnInUse),
    (395, ApiErrorKind::ObjectGroupPermissionNotFound),
    (396, ApiErrorKind::ObjectGroupPermissionDuplicated),
    (397, ApiErrorKind::UserNotAuthorized),
    (398, ApiErrorKind::EquipmentMaintenance),
    (399, ApiErrorKind::EquipmentInUse),
    (401, ApiErrorKind::UserNotAuthenticated),
    (402, ApiErrorKind::UserNotAuthorized),
    (403, ApiErrorKind::UserNotAuthorized),
    (405, ApiErrorKind::PoolNotFound),
    (406, ApiErrorKind::PoolDuplicated),
    (407, ApiErrorKind::PoolInUse),
    (408, ApiErrorKind::PoolMemberNotFound),
    (409, ApiErrorKind::PoolDeployed),
    (410, ApiErrorKind::PoolNotDeployed),
    (411, ApiErrorKind::EventLogInvalidPeriod),
    (412, ApiErrorKind::VipNotFound),
    (413, ApiErrorKind::VipAlreadyCreated),
    (414, ApiErrorKind::VipNotCreated),
    (415, ApiErrorKind::VipInvalidPort),
    (416, ApiErrorKind::VipInvalidHealthcheck),
    (417, ApiErrorKind::RealServerNotFound),
    (418, ApiErrorKind::RealServerDuplicated),
    (419, ApiErrorKind::EnvironmentVipNotFound),
    (420, ApiErrorKind::OptionVipNotFound),
    (2001, ApiErrorKind::ScriptExecution),
    (2002, ApiErrorKind::ScriptExecution),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(ERROR_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_table_covers_every_family() {
        assert!(ERROR_CODES.len() > 300);
        let cases = [
            (1, ApiErrorKind::DataBase),
            (3, ApiErrorKind::Xml),
            (7, ApiErrorKind::ScriptExecution),
            (100, ApiErrorKind::EquipmentTypeNotFound),
            (105, ApiErrorKind::GroupL3NotFound),
            (110, ApiErrorKind::VlanNumberOutOfRange),
            (112, ApiErrorKind::EnvironmentNotFound),
            (116, ApiErrorKind::VlanNotFound),
            (119, ApiErrorKind::IpNotFound),
            (134, ApiErrorKind::NetworkAddressConflict),
            (149, ApiErrorKind::EquipmentNameDuplicated),
            (177, ApiErrorKind::UserNotFound),
            (205, ApiErrorKind::UserNotFound),
            (219, ApiErrorKind::EnvironmentDuplicated),
            (258, ApiErrorKind::EquipmentGroupRightsNotFound),
            (269, ApiErrorKind::InvalidParameter),
            (283, ApiErrorKind::EnvironmentVipNotFound),
            (304, ApiErrorKind::LdapUserNotFound),
            (330, ApiErrorKind::PoolNotFound),
            (339, ApiErrorKind::FilterNotFound),
            (360, ApiErrorKind::OptionVipInUse),
            (379, ApiErrorKind::RackNotFound),
            (393, ApiErrorKind::AsnNotFound),
            (401, ApiErrorKind::UserNotAuthenticated),
            (402, ApiErrorKind::UserNotAuthorized),
            (409, ApiErrorKind::PoolDeployed),
            (411, ApiErrorKind::EventLogInvalidPeriod),
            (414, ApiErrorKind::VipNotCreated),
            (2001, ApiErrorKind::ScriptExecution),
        ];
        for (code, kind) in cases {
            assert_eq!(ApiErrorKind::from_code(code), Some(kind), "code {code}");
        }
    }

    #[test]
    fn test_missing_code() {
        assert_eq!(ApiErrorKind::from_code(0), None);
        assert_eq!(ApiErrorKind::from_code(404), None);
        assert_eq!(ApiErrorKind::from_code(500), None);
        assert_eq!(ApiErrorKind::from_code(503), None);
        assert_eq!(ApiErrorKind::from_code(u32::MAX), None);
    }
}
