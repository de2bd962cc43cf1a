#![allow(clippy::unwrap_used)]
// Integration tests for the v3/v4 JSON façades using wiremock.

use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use networkapi_client::{
    ApiResource, ClientConfig, ClientFactory, Deployable, NetworkApiError, QueryOptions,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// Route the client's request logs to the test output (`RUST_LOG=debug` to see them)
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn setup() -> (MockServer, ClientFactory) {
    init_tracing();
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri(), "napi-user", "napi-pass");
    let factory = ClientFactory::new(config).unwrap();
    (server, factory)
}

// ── Shared resource operations ──────────────────────────────────────

#[tokio::test]
async fn test_search_sends_basic_auth_and_options() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/vlan/"))
        .and(basic_auth("napi-user", "napi-pass"))
        .and(query_param("search", r#"{"extends_search":[{"num_vlan":10}]}"#))
        .and(query_param("fields", "id,name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "vlans": [{ "id": 1, "name": "VLAN_10" }],
            "total": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    let options = QueryOptions::search(json!({ "extends_search": [{ "num_vlan": 10 }] }))
        .with_fields(["id", "name"]);
    let response = factory.create_api_vlan().search(&options).await.unwrap();

    assert_eq!(response["vlans"][0]["name"], "VLAN_10");
    assert_eq!(response["total"], 1);
}

#[tokio::test]
async fn test_get_by_ids() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/environment/1;2/"))
        .and(query_param("kind", "basic"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "environments": [{ "id": 1 }, { "id": 2 }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = factory
        .create_api_environment()
        .get(&[1, 2], &QueryOptions::default().with_kind("basic"))
        .await
        .unwrap();
    assert_eq!(response["environments"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_wraps_items_under_key() {
    let (server, factory) = setup().await;

    let pool = json!({ "identifier": "pool_web", "default_port": 80, "environment": 5 });
    Mock::given(method("POST"))
        .and(path("/api/v3/pool/"))
        .and(body_json(json!({ "server_pools": [pool.clone()] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{ "id": 12 }])))
        .expect(1)
        .mount(&server)
        .await;

    let created = factory.create_api_pool().create(&[pool]).await.unwrap();
    assert_eq!(created, json!([{ "id": 12 }]));
}

#[tokio::test]
async fn test_delete_empty_body_is_null() {
    let (server, factory) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v4/equipment/7;8/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = factory.create_api_equipment().delete(&[7, 8]).await.unwrap();
    assert!(response.is_null());
}

#[tokio::test]
async fn test_deploy_vip_request() {
    let (server, factory) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/vip-request/deploy/4/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 4, "created": true }])))
        .expect(1)
        .mount(&server)
        .await;

    let response = factory.create_api_vip_request().deploy(&[4]).await.unwrap();
    assert_eq!(response[0]["created"], true);
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_detail_surfaces() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/networkv4/30/"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "detail": "Network 30 do not exist." })),
        )
        .mount(&server)
        .await;

    let result = factory
        .create_api_network_ipv4()
        .get(&[30], &QueryOptions::default())
        .await;

    match result {
        Err(NetworkApiError::Client { status, detail }) => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Network 30 do not exist.");
        }
        other => panic!("expected Client error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_detail_keeps_body() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v4/as/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = factory.create_api_asn().search(&QueryOptions::default()).await;
    assert!(
        matches!(&result, Err(NetworkApiError::Client { status: 502, detail }) if detail == "Bad Gateway"),
        "expected Client error, got: {result:?}"
    );
}
