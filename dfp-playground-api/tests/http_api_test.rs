//! HTTP transport tests against a local mock server.
//!
//! ```bash
//! cargo test -p dfp-playground-api --test http_api_test
//! ```

use std::time::Duration;

use dfp_playground_api::{
    ApiClientConfig, ApiError, HttpPlaygroundApi, PlaygroundApi, QueryParams,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> HttpPlaygroundApi {
    HttpPlaygroundApi::new(ApiClientConfig::new(server.uri())).expect("valid mock server URL")
}

#[tokio::test]
async fn list_networks_decodes_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"networkCode": "1234", "displayName": "Main"},
                {"networkCode": "5678", "displayName": "Test", "isTest": true}
            ],
            "totalResultSetSize": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let networks = api_for(&server).list_networks().await.expect("networks");
    assert_eq!(networks.results.len(), 2);
    assert_eq!(networks.results[0].network_code, "1234");
    assert_eq!(networks.results[1].is_test, Some(true));
    assert_eq!(networks.total_result_set_size, Some(2));
}

#[tokio::test]
async fn query_sends_all_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/lineitems"))
        .and(query_param("where", "WHERE id != 0"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .and(query_param("network_code", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": 1, "name": "Line item 1"}],
            "totalResultSetSize": 1,
            "limit": 100,
            "offset": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams::new("WHERE id != 0", 100, 0, "1234");
    let response = api_for(&server)
        .query(&params.uri("lineitems"))
        .await
        .expect("query");

    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0]["name"], "Line item 1");
    assert_eq!(response.total_result_set_size, Some(1));
    assert!(response.columns.is_none());
}

#[tokio::test]
async fn query_maps_status_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Limit must be an integer"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .query("/api/orders?where=x&network_code=1&limit=1&offset=0")
        .await
        .expect_err("400 must fail");

    assert_eq!(err.to_string(), "HTTP 400 Error");
    assert!(matches!(
        err,
        ApiError::Http { status: 400, body: Some(ref b), .. } if b == "Limit must be an integer"
    ));
}

#[tokio::test]
async fn query_rejects_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .query("/api/users?where=x&network_code=1&limit=1&offset=0")
        .await
        .expect_err("html is not a query response");
    assert!(matches!(err, ApiError::ParseError { .. }));
}

#[tokio::test]
async fn no_retry_by_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = api_for(&server).list_networks().await.expect_err("503");
    assert!(matches!(err, ApiError::Http { status: 503, .. }));
}

#[tokio::test]
async fn retries_transient_errors_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let api = HttpPlaygroundApi::new(ApiClientConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        max_retries: 3,
        ..ApiClientConfig::default()
    })
    .expect("client");

    let networks = api.list_networks().await.expect("third attempt succeeds");
    assert!(networks.results.is_empty());
}

#[tokio::test]
async fn make_test_network_posts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    api_for(&server)
        .make_test_network()
        .await
        .expect("test network created");
}

#[tokio::test]
async fn make_test_network_does_not_follow_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/"))
        .expect(1)
        .mount(&server)
        .await;
    // 首页需要浏览器登录
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .expect(0)
        .mount(&server)
        .await;

    api_for(&server)
        .make_test_network()
        .await
        .expect("redirect after POST means the network was created");
}

#[tokio::test]
async fn make_test_network_reports_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/networks"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = api_for(&server)
        .make_test_network()
        .await
        .expect_err("403 must fail");
    assert!(matches!(err, ApiError::Http { status: 403, .. }));
}

#[tokio::test]
async fn requests_keep_base_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playground/api/networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/playground/api/adunits"))
        .and(query_param("network_code", "1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let api = HttpPlaygroundApi::new(ApiClientConfig::new(format!(
        "{}/playground/",
        server.uri()
    )))
    .expect("client");

    api.list_networks().await.expect("networks below prefix");
    let params = QueryParams::new("WHERE id != 0", 25, 0, "1234");
    api.query(&params.uri("adunits"))
        .await
        .expect("query below prefix");
}
