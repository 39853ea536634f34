// Integration tests for `AuvikClient` using wiremock.

use chrono::{TimeZone, Utc};
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use auvik_api::types::{DeviceMetric, DeviceType, InterfaceMetric};
use auvik_api::{AuvikClient, Error, ReportWindow};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AuvikClient) {
    let server = MockServer::start().await;
    let client = AuvikClient::from_reqwest(
        &server.uri(),
        "ops@example.com",
        SecretString::from("api-key"),
        reqwest::Client::new(),
    )
    .unwrap();
    (server, client)
}

fn fixed_window() -> ReportWindow {
    ReportWindow {
        start: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 2, 14, 0, 0, 0).unwrap(),
    }
}

fn tenant_entity(id: &str, domain: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "attributes": { "domainPrefix": domain, "displayName": name }
    })
}

// ── Pagination ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_tenants_concatenates_pages_in_link_order() {
    let (server, client) = setup().await;

    let second_url = format!("{}/tenants/detail?page=2", server.uri());

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .and(query_param("tenantDomainPrefix", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                tenant_entity("t-1", "alpha", "Alpha Networks"),
                tenant_entity("t-2", "beta", "Beta Industries"),
            ],
            "links": { "next": second_url }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ tenant_entity("t-3", "gamma", "Gamma LLC") ],
            "links": {}
        })))
        .mount(&server)
        .await;

    let tenants = client.list_tenants("acme").await.unwrap();

    assert_eq!(tenants.len(), 3);
    assert_eq!(tenants[0].attributes.domain_prefix, "alpha");
    assert_eq!(tenants[1].attributes.domain_prefix, "beta");
    assert_eq!(tenants[2].attributes.domain_prefix, "gamma");
}

#[tokio::test]
async fn test_empty_result_set_is_ok() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": {}
        })))
        .mount(&server)
        .await;

    let tenants = client.list_tenants("acme").await.unwrap();
    assert!(tenants.is_empty());
}

#[tokio::test]
async fn test_cycle_back_to_first_page_fails_before_refetch() {
    let (server, client) = setup().await;

    let first_url = format!("{}/tenants/detail?tenantDomainPrefix=acme", server.uri());
    let second_url = format!("{}/tenants/detail?page=2", server.uri());

    // expect(1) on both pages proves nothing is requested twice.
    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .and(query_param("tenantDomainPrefix", "acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ tenant_entity("t-1", "alpha", "Alpha Networks") ],
            "links": { "next": second_url }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ tenant_entity("t-2", "beta", "Beta Industries") ],
            "links": { "next": first_url.clone() }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;

    match result {
        Err(Error::CircularPagination { ref url }) => assert_eq!(url, &first_url),
        other => panic!("expected CircularPagination, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_self_linking_page_fails_immediately() {
    let (server, client) = setup().await;

    let first_url = format!("{}/tenants/detail?tenantDomainPrefix=acme", server.uri());

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": { "next": first_url }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;
    assert!(matches!(result, Err(Error::CircularPagination { .. })));
}

#[tokio::test]
async fn test_unparseable_next_link_is_invalid_url() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/tenants/detail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": { "next": "page two please" }
        })))
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;
    assert!(matches!(result, Err(Error::InvalidUrl(_))));
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_http_500_maps_to_fetch() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;

    match result {
        Err(Error::Fetch { ref url, ref source }) => {
            assert!(url.contains("/tenants/detail"));
            assert_eq!(
                source.status(),
                Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            );
        }
        other => panic!("expected Fetch error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_401_is_flagged_as_auth() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.list_tenants("acme").await.unwrap_err();
    assert!(err.is_auth());
    assert!(!err.is_transient());
}

#[tokio::test]
async fn test_non_json_body_maps_to_decode() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

#[tokio::test]
async fn test_schema_violation_maps_to_decode() {
    let (server, client) = setup().await;

    // `data` rows missing required attributes.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "id": "t-1" } ],
            "links": {}
        })))
        .mount(&server)
        .await;

    let result = client.list_tenants("acme").await;
    assert!(matches!(result, Err(Error::Decode { .. })));
}

// ── Query binding ───────────────────────────────────────────────────

#[tokio::test]
async fn test_open_alerts_binds_status_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/alert/history/info"))
        .and(query_param("tenants", "t-1"))
        .and(query_param("filter[status]", "created"))
        .and(query_param("filter[dismissed]", "false"))
        .and(query_param("filter[dispatched]", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "a-1", "attributes": { "severity": "critical", "status": "created" } }
            ],
            "links": {}
        })))
        .mount(&server)
        .await;

    let alerts = client.open_alerts("t-1").await.unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].attributes.severity, "critical");
}

#[tokio::test]
async fn test_device_stats_binds_window_interval_and_type() {
    let (server, client) = setup().await;
    let window = fixed_window();

    Mock::given(method("GET"))
        .and(path("/stat/device/bandwidth"))
        .and(query_param("filter[fromTime]", "2024-01-15T00:00:00.000Z"))
        .and(query_param("filter[thruTime]", "2024-02-14T00:00:00.000Z"))
        .and(query_param("filter[interval]", "hour"))
        .and(query_param("filter[deviceType]", "firewall"))
        .and(query_param("tenants", "t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": {}
        })))
        .mount(&server)
        .await;

    let stats = client
        .device_stats("t-1", DeviceMetric::Bandwidth, &window, Some(DeviceType::Firewall))
        .await
        .unwrap();
    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_interface_stats_bind_parent_device() {
    let (server, client) = setup().await;
    let window = fixed_window();

    Mock::given(method("GET"))
        .and(path("/stat/interface/utilization"))
        .and(query_param("filter[interval]", "hour"))
        .and(query_param("filter[parentDevice]", "d-77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "i-1",
                    "attributes": { "stats": [ { "data": [[1.0, 42.0]] } ] },
                    "relationships": {
                        "interface": {
                            "data": { "interfaceName": "ge-0/0/1", "parentDevice": "d-77" }
                        }
                    }
                }
            ],
            "links": {}
        })))
        .mount(&server)
        .await;

    let stats = client
        .interface_stats("d-77", InterfaceMetric::Utilization, &window, None)
        .await
        .unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].interface().interface_name, "ge-0/0/1");
    assert_eq!(stats[0].samples(), &[vec![1.0, 42.0]]);
}

#[tokio::test]
async fn test_device_info_unwraps_single_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/inventory/device/info/d-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "d-42",
                "attributes": { "deviceName": "core-sw", "deviceType": "switch" },
                "relationships": {
                    "networks": {
                        "data": [ { "attributes": { "networkName": "HQ LAN" } } ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let device = client.device_info("d-42").await.unwrap();

    assert_eq!(device.attributes.device_name, "core-sw");
    assert_eq!(
        device.relationships.networks.data[0].attributes.network_name,
        "HQ LAN"
    );
}
