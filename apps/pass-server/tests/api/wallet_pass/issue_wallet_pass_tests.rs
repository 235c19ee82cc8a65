use pass_core::model::profile::Role;

use crate::fixtures::{self, TEST_SERVICE_ACCOUNT_EMAIL};
use crate::utils::api_clients::Session;
use crate::utils::context::TestContext;

const CLASS_ID: &str = "ISSUER123.HackWesternUserPass";

#[tokio::test]
async fn test_issue_wallet_pass_success() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Hacker).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_created(1).await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let save_url = body["saveToWalletUrl"].as_str().unwrap();

    let claims = fixtures::decode_save_url(save_url);
    assert_eq!(claims["iss"], TEST_SERVICE_ACCOUNT_EMAIL);
    assert_eq!(claims["typ"], "savetowallet");
    assert_eq!(claims["origins"][0], "https://hackwestern.com");

    let objects = claims["payload"]["genericObjects"].as_array().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0]["classId"], CLASS_ID);
    assert!(
        objects[0]["id"]
            .as_str()
            .unwrap()
            .starts_with("ISSUER123.u1-")
    );
}

#[tokio::test]
async fn test_issue_wallet_pass_with_session_cookie() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Organizer).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_created(1).await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context
        .api
        .wallet_pass
        .issue(Session::Cookie {
            name: "session",
            token: &token,
        })
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_issue_wallet_pass_twice_creates_distinct_objects() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Mentor).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_created(2).await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let first = context.api.wallet_pass.issue(Session::Bearer(&token)).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(first.status(), 200);
    assert_eq!(second.status(), 200);

    let object_id = |body: serde_json::Value| {
        let claims = fixtures::decode_save_url(body["saveToWalletUrl"].as_str().unwrap());
        claims["payload"]["genericObjects"][0]["id"]
            .as_str()
            .unwrap()
            .to_owned()
    };
    assert_ne!(
        object_id(first.json_value().await),
        object_id(second.json_value().await)
    );
}

#[tokio::test]
async fn test_issue_wallet_pass_missing_session() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.no_upstream_calls().await;

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::None).await;

    // THEN
    assert_eq!(resp.status(), 401);
    let body = resp.json_value().await;
    assert_eq!(body["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_issue_wallet_pass_invalid_session() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.no_upstream_calls().await;

    // WHEN
    let resp = context
        .api
        .wallet_pass
        .issue(Session::Bearer("not-a-jwt"))
        .await;

    // THEN
    assert_eq!(resp.status(), 401);
    assert_eq!(resp.json_value().await["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_issue_wallet_pass_unknown_user() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.no_upstream_calls().await;
    let token = fixtures::session_token("ghost");

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.json_value().await["error"], "PROFILE_NOT_FOUND");
}

#[tokio::test]
async fn test_issue_wallet_pass_conflict_resolved_by_fetch() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Volunteer).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_conflict().await;
    context.server_mock.get_object(CLASS_ID).await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let claims = fixtures::decode_save_url(body["saveToWalletUrl"].as_str().unwrap());
    assert_eq!(claims["payload"]["genericObjects"][0]["classId"], CLASS_ID);
}

#[tokio::test]
async fn test_issue_wallet_pass_conflict_fetch_fails() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Hacker).await;
    context.server_mock.token_endpoint().await;
    context.server_mock.insert_object_conflict().await;
    context.server_mock.get_object_not_found().await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 500);
    assert_eq!(
        resp.json_value().await["error"],
        "CONFLICT_RESOLUTION_FAILED"
    );
}

#[tokio::test]
async fn test_issue_wallet_pass_upstream_rejected() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Sponsor).await;
    context.server_mock.token_endpoint().await;
    context
        .server_mock
        .insert_object_error(400, "Invalid class id")
        .await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 500);
    let body = resp.json_value().await;
    assert_eq!(body["error"], "UPSTREAM_REJECTED");
    assert!(body["message"].as_str().unwrap().contains("Invalid class id"));
}

#[tokio::test]
async fn test_issue_wallet_pass_upstream_unavailable() {
    // GIVEN
    let (context, user) = TestContext::new_with_user(Role::Attendee).await;
    context.server_mock.token_endpoint().await;
    context
        .server_mock
        .insert_object_error(503, "Backend error")
        .await;
    let token = fixtures::session_token(user.id.as_ref());

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.json_value().await["error"], "UPSTREAM_UNAVAILABLE");
}

#[tokio::test]
async fn test_issue_wallet_pass_hidden_error_cause() {
    // GIVEN
    let context = TestContext::new_with_config(indoc::indoc! {"
        app:
            hideErrorResponseCause: true
    "}
    .to_owned())
    .await;
    context.server_mock.no_upstream_calls().await;

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::None).await;

    // THEN
    assert_eq!(resp.status(), 401);
    similar_asserts::assert_eq!(
        resp.json_value().await,
        serde_json::json!({ "error": "UNAUTHENTICATED" })
    );
}

#[tokio::test]
async fn test_issue_wallet_pass_misconfigured_fails_closed() {
    // GIVEN
    let context = TestContext::new_misconfigured().await;
    context.server_mock.no_upstream_calls().await;
    fixtures::create_user(&context.db, "u1", Role::Hacker).await;
    let token = fixtures::session_token("u1");

    // WHEN
    let resp = context.api.wallet_pass.issue(Session::Bearer(&token)).await;

    // THEN
    assert_eq!(resp.status(), 500);
    assert_eq!(resp.json_value().await["error"], "CONFIGURATION_ERROR");
}

#[tokio::test]
async fn test_wallet_pass_method_not_allowed() {
    // GIVEN
    let context = TestContext::new().await;
    context.server_mock.no_upstream_calls().await;

    // WHEN
    let resp = context.api.wallet_pass.get().await;

    // THEN
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.header("allow").as_deref(), Some("POST"));
    assert_eq!(resp.json_value().await["error"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_wallet_pass_method_not_allowed_hidden_error_cause() {
    // GIVEN
    let context = TestContext::new_with_config(indoc::indoc! {"
        app:
            hideErrorResponseCause: true
    "}
    .to_owned())
    .await;
    context.server_mock.no_upstream_calls().await;

    // WHEN
    let resp = context.api.wallet_pass.get().await;

    // THEN
    assert_eq!(resp.status(), 405);
    assert_eq!(resp.header("allow").as_deref(), Some("POST"));
    similar_asserts::assert_eq!(
        resp.json_value().await,
        serde_json::json!({ "error": "METHOD_NOT_ALLOWED" })
    );
}
