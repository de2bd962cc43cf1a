//! IPv4 and IPv6 address resources (v4 paths)

use super::api_resource;

api_resource!(
    /// `api/v4/ipv4/`
    ApiIpv4, "api/v4/ipv4/", "ips"
);

api_resource!(
    /// `api/v4/ipv6/`
    ApiIpv6, "api/v4/ipv6/", "ips"
);
