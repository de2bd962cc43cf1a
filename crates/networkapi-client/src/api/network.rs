//! IPv4 and IPv6 network resources

use super::{Deployable, api_resource};

api_resource!(
    /// `api/v3/networkv4/`
    ApiNetworkIpv4, "api/v3/networkv4/", "networks"
);

impl Deployable for ApiNetworkIpv4 {
    const DEPLOY_PATH: &'static str = "api/v3/networkv4/deploy/";
}

api_resource!(
    /// `api/v3/networkv6/`
    ApiNetworkIpv6, "api/v3/networkv6/", "networks"
);

impl Deployable for ApiNetworkIpv6 {
    const DEPLOY_PATH: &'static str = "api/v3/networkv6/deploy/";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ApiClient;
    use crate::mock::MockTransport;
    use crate::transport::HttpMethod;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_deploy_and_undeploy() {
        let mock = MockTransport::new();
        mock.push_json(200, &json!({}));
        mock.push_json(200, &json!({}));

        let networks = ApiNetworkIpv4::new(ApiClient::new("http://napi.test", Arc::new(mock.clone())));
        networks.deploy(&[3, 5]).await.unwrap();
        networks.undeploy(&[3]).await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://napi.test/api/v3/networkv4/deploy/3;5/");
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert_eq!(requests[1].url, "http://napi.test/api/v3/networkv4/deploy/3/");
    }
}
