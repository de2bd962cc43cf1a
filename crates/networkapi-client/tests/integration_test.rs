//! Integration tests for the NetworkAPI client
//!
//! These tests require a running NetworkAPI instance.
//! Set NETWORKAPI_URL, NETWORKAPI_USERNAME and NETWORKAPI_PASSWORD to run.

use networkapi_client::{ApiResource, ClientConfig, ClientFactory, QueryOptions};

fn factory() -> ClientFactory {
    let config = ClientConfig::from_env().expect("NETWORKAPI_* environment variables must be set");
    ClientFactory::new(config).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetworkAPI instance
async fn test_list_environments() {
    let environments = factory()
        .create_environment()
        .list_all()
        .await
        .expect("Failed to list environments");

    let count = environments["ambiente"].as_array().map_or(0, Vec::len);
    println!("Found {count} environments");
}

#[tokio::test]
#[ignore]
async fn test_list_equipment_types() {
    let types = factory()
        .create_equipment_type()
        .list_all()
        .await
        .expect("Failed to list equipment types");

    assert!(types["equipment_type"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_search_vlans() {
    let vlans = factory()
        .create_api_vlan()
        .search(&QueryOptions::default().with_kind("basic"))
        .await
        .expect("Failed to search vlans");

    println!("Found {} vlans", vlans["total"]);
}

#[tokio::test]
#[ignore]
async fn test_missing_vlan_reports_code() {
    let err = factory()
        .create_vlan()
        .get(u64::from(u32::MAX))
        .await
        .expect_err("Vlan should not exist");

    println!("Server reported: {err} ({:?})", err.kind());
}
