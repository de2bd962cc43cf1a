#![allow(clippy::unwrap_used)]
// Integration tests for the legacy XML façades using wiremock.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use networkapi_client::{
    ApiErrorKind, ClientConfig, ClientFactory, HttpTransport, NetworkApiError, Pagination,
};
use networkapi_client::legacy::VlanSearch;

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

fn document(inner: &str) -> String {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><networkapi versao=\"1.0\">{inner}</networkapi>")
}

fn xml_ok(inner: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(document(inner))
}

fn xml_error(code: u32, description: &str) -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_string(document(&format!(
        "<erro><codigo>{code:04}</codigo><descricao>{description}</descricao></erro>"
    )))
}

// ── Request shape ───────────────────────────────────────────────────

#[tokio::test]
async fn test_credentials_sent_as_headers() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/environment/id/7/"))
        .and(header("NETWORKAPI_USERNAME", "napi-user"))
        .and(header("NETWORKAPI_PASSWORD", "napi-pass"))
        .respond_with(xml_ok("<ambiente><id>7</id></ambiente>"))
        .expect(1)
        .mount(&server)
        .await;

    let environment = factory.create_environment().get_by_id(7).await.unwrap();
    assert_eq!(environment, json!({ "id": "7" }));
}

#[tokio::test]
async fn test_ldap_user_header_only_when_configured() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri(), "napi-user", "napi-pass").with_user_ldap("jdoe");
    let transport = HttpTransport::new(&config).unwrap();
    let factory = ClientFactory::with_transport(server.uri(), Arc::new(transport));

    Mock::given(method("GET"))
        .and(path("/vlan/3/"))
        .and(header("NETWORKAPI_USERLDAP", "jdoe"))
        .respond_with(xml_ok("<vlan><id>3</id><nome>VLAN_APP</nome></vlan>"))
        .expect(1)
        .mount(&server)
        .await;

    let vlan = factory.create_vlan().get(3).await.unwrap();
    assert_eq!(vlan["nome"], "VLAN_APP");
}

#[tokio::test]
async fn test_payload_encoded_under_networkapi_root() {
    let (server, factory) = setup().await;

    Mock::given(method("POST"))
        .and(path("/vlan/find/"))
        .and(header("Content-Type", "text/plain"))
        .and(body_string_contains("<networkapi versao=\"1.0\"><vlan>"))
        .and(body_string_contains("<nome>VLAN_WEB</nome>"))
        .and(body_string_contains("<end_record>25</end_record>"))
        .respond_with(xml_ok("<vlan><id>1</id></vlan><total>1</total>"))
        .expect(1)
        .mount(&server)
        .await;

    let search = VlanSearch {
        name: Some("VLAN_WEB".into()),
        ..VlanSearch::default()
    };
    let response = factory
        .create_vlan()
        .find(&search, &Pagination::new(0, 25))
        .await
        .unwrap();

    assert_eq!(response["vlan"], json!([{ "id": "1" }]));
    assert_eq!(response["total"], "1");
}

#[tokio::test]
async fn test_percent_doubled_in_request() {
    let (server, factory) = setup().await;

    Mock::given(method("POST"))
        .and(path("/vlan/"))
        .and(body_string_contains("<descricao>50%% reserved</descricao>"))
        .respond_with(xml_ok("<vlan><id>9</id></vlan>"))
        .expect(1)
        .mount(&server)
        .await;

    let vlan = factory
        .create_vlan()
        .allocate("VLAN_NEW", 1, 2, Some("50% reserved"), None, None)
        .await
        .unwrap();
    assert_eq!(vlan["id"], "9");
}

// ── Response decoding ───────────────────────────────────────────────

#[tokio::test]
async fn test_force_list_yields_arrays() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vlan/ambiente/4/"))
        .respond_with(xml_ok("<vlan><id>1</id></vlan>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/vlan/ambiente/5/"))
        .respond_with(xml_ok(""))
        .mount(&server)
        .await;

    let vlan = factory.create_vlan();
    assert_eq!(vlan.list_by_environment(4).await.unwrap(), json!({ "vlan": [{ "id": "1" }] }));
    assert_eq!(vlan.list_by_environment(5).await.unwrap(), json!({ "vlan": [] }));
}

#[tokio::test]
async fn test_repeated_elements_promoted_in_order() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ambiente/all/"))
        .respond_with(xml_ok(
            "<ambiente><id>1</id></ambiente><ambiente><id>2</id></ambiente><ambiente><id>3</id></ambiente>",
        ))
        .mount(&server)
        .await;

    let environments = factory.create_environment().list().await.unwrap();
    let ids: Vec<&str> = environments["ambiente"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[tokio::test]
async fn test_illegal_characters_sanitized() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/equipamento/id/2/"))
        .respond_with(xml_ok("<equipamento><nome>SW&#1;01</nome></equipamento>"))
        .mount(&server)
        .await;

    let equipment = factory.create_equipment().get_by_id(2).await.unwrap();
    assert_eq!(equipment["nome"], "SW?01");
}

// ── Error dispatch ──────────────────────────────────────────────────

#[tokio::test]
async fn test_error_code_dispatched_to_kind() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/vlan/99/"))
        .respond_with(xml_error(116, "Vlan 99 not found."))
        .mount(&server)
        .await;

    let err = factory.create_vlan().get(99).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::VlanNotFound));
    assert_eq!(err.to_string(), "Vlan 99 not found.");
    assert!(
        matches!(err, NetworkApiError::Api { code: 116, .. }),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_unknown_code_is_generic() {
    let (server, factory) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/ambiente/4/"))
        .respond_with(xml_error(9999, "Something unexpected."))
        .mount(&server)
        .await;

    let err = factory.create_environment().remove(4).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::Generic));
    assert_eq!(err.to_string(), "Something unexpected.");
}

#[tokio::test]
async fn test_http_status_dispatched_through_table() {
    let (server, factory) = setup().await;

    Mock::given(method("GET"))
        .and(path("/ambiente/list/"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rack/list/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = factory.create_environment().list_all().await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::UserNotAuthenticated));

    let err = factory.create_rack().list().await.unwrap_err();
    assert!(
        matches!(err, NetworkApiError::Client { status: 503, .. }),
        "expected Client error, got: {err:?}"
    );
}

#[tokio::test]
async fn test_connection_refused_is_connection_error() {
    let config = ClientConfig::new("http://127.0.0.1:1", "napi-user", "napi-pass");
    let factory = ClientFactory::new(config).unwrap();

    let err = factory.create_vlan().get(1).await.unwrap_err();
    assert!(err.is_connection(), "expected Connection error, got: {err:?}");
}
