use pass_core::model::profile::Role;

use crate::fixtures;
use crate::utils::api_clients::Session;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health() {
    let context = TestContext::new().await;

    let resp = context.api.other.health().await;

    assert_eq!(resp.status(), 204);
}

#[tokio::test]
async fn test_build_info() {
    let context = TestContext::new().await;

    let resp = context.api.other.build_info().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["rust_version"].is_string());
    assert!(body["commit"].is_string());
    assert_eq!(body["version"], "0.1.0");
}

#[tokio::test]
async fn test_metrics_count_issuance_requests() {
    pass_server::metrics::setup();
    let context = TestContext::new().await;
    context.api.wallet_pass.issue(Session::None).await;

    let resp = context.api.other.metrics().await;

    assert_eq!(resp.status(), 200);
    let metrics = resp.text().await;
    assert!(metrics.contains("incoming_requests"));
    assert!(metrics.contains("response_time"));
}

#[tokio::test]
async fn test_openapi_document() {
    let context = TestContext::new().await;

    let resp = context.api.other.openapi_json().await;

    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert!(body["paths"]["/api/wallet-pass/v1"]["post"].is_object());
    assert!(body["components"]["schemas"]["ErrorCode"].is_object());
}

#[tokio::test]
async fn test_technical_endpoints_disabled() {
    let context = TestContext::new_with_config(indoc::indoc! {"
        app:
            enableMetrics: false
            enableServerInfo: false
            enableOpenApi: false
    "}
    .to_owned())
    .await;

    assert_eq!(context.api.other.health().await.status(), 404);
    assert_eq!(context.api.other.metrics().await.status(), 404);
    assert_eq!(context.api.other.openapi_json().await.status(), 404);
}

#[tokio::test]
async fn test_issuance_available_with_technical_endpoints_disabled() {
    let context = TestContext::new_with_config(indoc::indoc! {"
        app:
            enableServerInfo: false
    "}
    .to_owned())
    .await;
    fixtures::create_user(&context.db, "u1", Role::Hacker).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_created(1).await;

    let resp = context
        .api
        .wallet_pass
        .issue(Session::Bearer(&fixtures::session_token("u1")))
        .await;

    assert_eq!(resp.status(), 200);
}
