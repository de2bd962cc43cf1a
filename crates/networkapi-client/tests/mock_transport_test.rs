#![allow(clippy::unwrap_used)]
// Façade behaviour checked against MockTransport: validation happens before any
// request, and the recorded requests carry the expected method, path and body.

use std::sync::Arc;

use serde_json::json;

use networkapi_client::legacy::{EquipmentSearch, IpVersion, Rights, VlanSearch};
use networkapi_client::transport::AuthScheme;
use networkapi_client::{ApiErrorKind, ClientFactory, HttpMethod, MockTransport, Pagination};

fn factory(mock: &MockTransport) -> ClientFactory {
    ClientFactory::with_transport("http://napi.test", Arc::new(mock.clone()))
}

// ── Validation ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_ids_never_reach_transport() {
    let mock = MockTransport::new();
    let factory = factory(&mock);
    let vlan = factory.create_vlan();

    let err = vlan.get(None::<u64>).await.unwrap_err();
    assert!(err.is_invalid_parameter());
    assert_eq!(err.to_string(), "Invalid parameter: Vlan id is invalid or was not informed.");

    assert!(vlan.get("abc").await.unwrap_err().is_invalid_parameter());
    assert!(vlan.get(-1).await.unwrap_err().is_invalid_parameter());
    assert!(vlan.get("").await.unwrap_err().is_invalid_parameter());
    assert!(
        factory
            .create_equipment()
            .associate_group(3, "x1")
            .await
            .unwrap_err()
            .is_invalid_parameter()
    );

    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_invalid_ipv4_rejected() {
    let mock = MockTransport::new();
    let ip = factory(&mock).create_ip();

    assert!(ip.search_by_ip_environment("10.0.0.256", 1).await.unwrap_err().is_invalid_parameter());
    assert!(ip.search_by_ip_environment("10.0.0", 1).await.unwrap_err().is_invalid_parameter());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_string_ids_accepted() {
    let mock = MockTransport::new();
    mock.push_xml("<vlan><id>42</id></vlan>");

    let vlan = factory(&mock).create_vlan().get("42").await.unwrap();
    assert_eq!(vlan["id"], "42");
    assert_eq!(mock.last_request().unwrap().url, "http://napi.test/vlan/42/");
}

// ── Request shape ───────────────────────────────────────────────────

#[tokio::test]
async fn test_legacy_requests_use_header_auth() {
    let mock = MockTransport::new();
    mock.push_xml("<sucesso>ok</sucesso>");

    factory(&mock).create_vlan().validate(5, IpVersion::V6).await.unwrap();

    let request = mock.last_request().unwrap();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url, "http://napi.test/vlan/5/validate/v6/");
    assert_eq!(request.auth, AuthScheme::Headers);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn test_rights_payload() {
    let mock = MockTransport::new();
    mock.push_xml("<direito_grupo_equipamento><id>8</id></direito_grupo_equipamento>");

    let rights = Rights {
        read: true,
        write: true,
        ..Rights::default()
    };
    let created = factory(&mock)
        .create_equipment_group_rights()
        .insert(2, 3, rights)
        .await
        .unwrap();
    assert_eq!(created, json!({ "id": "8" }));

    let body = mock.last_request().unwrap().body.unwrap();
    assert!(body.contains("<id_grupo_usuario>2</id_grupo_usuario>"));
    assert!(body.contains("<leitura>1</leitura>"));
    assert!(body.contains("<exclusao>0</exclusao>"));
}

#[tokio::test]
async fn test_event_log_dates() {
    let mock = MockTransport::new();
    mock.push_xml("<eventlog><id>1</id></eventlog>");

    let search = networkapi_client::legacy::EventLogSearch {
        start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 2),
        end_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        ..Default::default()
    };
    let logs = factory(&mock)
        .create_event_log()
        .find(&search, &networkapi_client::Pagination::new(0, 10))
        .await
        .unwrap();
    assert_eq!(logs["eventlog"], json!([{ "id": "1" }]));

    let body = mock.last_request().unwrap().body.unwrap();
    assert!(body.contains("<data_inicial>02/01/2024</data_inicial>"));
    assert!(body.contains("<data_final>31/01/2024</data_final>"));
}

#[tokio::test]
async fn test_vlan_search_uses_server_field_names() {
    let mock = MockTransport::new();
    mock.push_xml("<total>0</total>");

    let search = VlanSearch {
        number: Some(10),
        name: Some("VLAN_WEB".into()),
        iexact: true,
        environment: Some(4),
        net_type: Some(2),
        network: Some("10.0.0.0/24".into()),
        ip_version: 2,
        subnet: true,
        acl: false,
    };
    factory(&mock)
        .create_vlan()
        .find(&search, &Pagination::new(0, 25))
        .await
        .unwrap();

    let body = mock.last_request().unwrap().body.unwrap();
    for expected in [
        "<numero>10</numero>",
        "<nome>VLAN_WEB</nome>",
        "<exato>True</exato>",
        "<ambiente>4</ambiente>",
        "<tipo_rede>2</tipo_rede>",
        "<rede>10.0.0.0/24</rede>",
        "<versao>2</versao>",
        "<subrede>True</subrede>",
        "<acl>False</acl>",
    ] {
        assert!(body.contains(expected), "missing {expected} in {body}");
    }
    assert!(!body.contains("<number>"));
    assert!(!body.contains("<name>"));
}

#[tokio::test]
async fn test_equipment_search_uses_server_field_names() {
    let mock = MockTransport::new();
    mock.push_xml("<equipamento><id>1</id><nome>SW-01</nome></equipamento><total>1</total>");

    let search = EquipmentSearch {
        name: Some("SW".into()),
        equip_type: Some(3),
        group: Some(5),
        ..EquipmentSearch::default()
    };
    let response = factory(&mock)
        .create_equipment()
        .find(&search, &Pagination::new(0, 10))
        .await
        .unwrap();
    assert_eq!(
        response["equipamento"],
        json!([{ "id": "1", "nome": "SW-01", "ips": [], "grupos": [] }])
    );

    let body = mock.last_request().unwrap().body.unwrap();
    assert!(body.contains("<nome>SW</nome>"));
    assert!(body.contains("<exato>False</exato>"));
    assert!(body.contains("<tipo_equipamento>3</tipo_equipamento>"));
    assert!(body.contains("<grupo>5</grupo>"));
    assert!(!body.contains("<equip_type>"));
}

// ── Response shape ──────────────────────────────────────────────────

#[tokio::test]
async fn test_vlan_without_networks_has_empty_lists() {
    let mock = MockTransport::new();
    mock.push_xml("<vlan><id>5</id><nome>V</nome></vlan>");

    let vlan = factory(&mock).create_vlan().get_with_networks(5).await.unwrap();
    assert_eq!(
        vlan,
        json!({ "id": "5", "nome": "V", "redeipv4": [], "redeipv6": [] })
    );
}

#[tokio::test]
async fn test_vlan_networks_listed_under_vlan() {
    let mock = MockTransport::new();
    mock.push_xml("<vlan><id>5</id><redeipv4><id>30</id></redeipv4></vlan>");

    let vlan = factory(&mock).create_vlan().get_with_networks(5).await.unwrap();
    assert_eq!(vlan["redeipv4"], json!([{ "id": "30" }]));
    assert_eq!(vlan["redeipv6"], json!([]));
}

// ── Errors ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_error_description_preserved() {
    let mock = MockTransport::new();
    mock.push_xml_error(112, "Environment 4 not registered.");

    let err = factory(&mock).create_environment().get_by_id(4).await.unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::EnvironmentNotFound));
    assert_eq!(err.to_string(), "Environment 4 not registered.");
}

#[tokio::test]
async fn test_missing_root_key_is_xml_error() {
    let mock = MockTransport::new();
    mock.push_xml("<outro><id>1</id></outro>");

    let err = factory(&mock).create_vlan().get(1).await.unwrap_err();
    assert!(matches!(err, networkapi_client::NetworkApiError::Xml(_)));
}
