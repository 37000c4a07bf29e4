//! End-to-end tests for the unauthorized-response rewrite.
//!
//! These drive the fully assembled router (request-id, bearer gate,
//! rewrite, resource handlers) with in-memory requests and assert on the
//! exact bytes a caller would receive.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use base64::Engine;
use tower::ServiceExt;

use resource_api::middleware::unauthorized_rewrite::{
    ERROR_DETAIL_PLACEHOLDER, INVALID_TOKEN, UNAUTHORIZED_ERROR_TEMPLATE,
};
use resource_api::{api, config, AppState};

fn test_router() -> Router {
    let state = Arc::new(AppState::with_seed_data(config::Config { port: 0 }));
    api::resource_router(state)
}

/// A structurally valid JWT. The signature is junk; the sandbox never
/// checks it.
fn well_formed_token(exp: i64) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let header = engine.encode(r#"{"alg":"PS256","typ":"JWT"}"#);
    let claims = engine.encode(format!(r#"{{"sub":"customer-1","exp":{exp}}}"#));
    format!("{}.{}.signature", header, claims)
}

fn expected_rewritten_body() -> String {
    UNAUTHORIZED_ERROR_TEMPLATE.replace(ERROR_DETAIL_PLACEHOLDER, INVALID_TOKEN)
}

async fn send(path: &str, authorization: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    let request = builder.body(Body::empty()).expect("should build request");

    test_router()
        .oneshot(request)
        .await
        .expect("should get response")
}

async fn body_string(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("should collect body");
    String::from_utf8(bytes.to_vec()).expect("should be utf8")
}

// ── Rewrite path ─────────────────────────────────────────────

/// Scenario A: accounts endpoint, 401, garbage bearer token → body replaced
/// with the `invalid_token` payload, status untouched.
#[tokio::test]
async fn test_malformed_token_gets_rewritten_body() {
    let resp = send("/cds-au/v1/banking/accounts", Some("Bearer not-a-jwt")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(body_string(resp).await, expected_rewritten_body());
}

#[tokio::test]
async fn test_missing_authorization_gets_rewritten_body() {
    let resp = send("/cds-au/v1/banking/accounts", None).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, expected_rewritten_body());
}

#[tokio::test]
async fn test_empty_bearer_gets_rewritten_body() {
    let resp = send("/cds-au/v1/banking/accounts", Some("Bearer ")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, expected_rewritten_body());
}

#[tokio::test]
async fn test_rewritten_body_is_exact_template_substitution() {
    let resp = send("/cds-au/v1/banking/accounts", Some("Bearer x.y")).await;
    let body = body_string(resp).await;

    assert_eq!(
        body,
        r#"{"errors": [{"code": "401", "title": "Unauthorized", "detail": "invalid_token"}]}"#
    );
}

// ── Pass-through paths ───────────────────────────────────────

/// Scenario B: accounts endpoint, 401 caused by an *expired* but well-formed
/// token → the bare 401 from the gate flows through unmodified.
#[tokio::test]
async fn test_expired_well_formed_token_is_not_rewritten() {
    let token = well_formed_token(1_000_000_000); // 2001, long expired
    let resp = send(
        "/cds-au/v1/banking/accounts",
        Some(&format!("Bearer {token}")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
    assert_eq!(body_string(resp).await, "", "gate's empty body must survive");
}

/// A well-formed token presented without the `Bearer ` prefix still decodes,
/// so its 401 is left alone too.
#[tokio::test]
async fn test_expired_token_without_prefix_is_not_rewritten() {
    let token = well_formed_token(1_000_000_000);
    let resp = send("/cds-au/v1/banking/accounts", Some(&token)).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, "");
}

/// Scenario C: a 401 from a path that does not end with the accounts suffix
/// is never touched, malformed token or not.
#[tokio::test]
async fn test_suffix_mismatch_is_not_rewritten() {
    let resp = send("/cds-au/v1/banking/transactions", Some("Bearer not-a-jwt")).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, "");
}

#[tokio::test]
async fn test_account_transactions_401_is_not_rewritten() {
    let resp = send(
        "/cds-au/v1/banking/accounts/acc-001/transactions",
        Some("Bearer not-a-jwt"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(resp).await, "");
}

/// Scenario D: accounts endpoint with a 200 response is returned as the
/// handler produced it.
#[tokio::test]
async fn test_successful_accounts_response_is_untouched() {
    let token = well_formed_token(9_999_999_999);
    let resp = send(
        "/cds-au/v1/banking/accounts",
        Some(&format!("Bearer {token}")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["data"]["accounts"][0]["accountId"], "acc-001");
    assert_eq!(json["meta"]["totalRecords"], 3);
    assert_eq!(json["links"]["self"], "/cds-au/v1/banking/accounts");
}

// ── Surrounding surface ──────────────────────────────────────

#[tokio::test]
async fn test_transactions_served_for_known_account() {
    let token = well_formed_token(9_999_999_999);
    let resp = send(
        "/cds-au/v1/banking/accounts/acc-001/transactions",
        Some(&format!("Bearer {token}")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(json["data"]["transactions"][0]["accountId"], "acc-001");
    assert_eq!(json["data"]["transactions"][0]["currency"], "AUD");
}

#[tokio::test]
async fn test_unknown_account_yields_cds_not_found() {
    let token = well_formed_token(9_999_999_999);
    let resp = send(
        "/cds-au/v1/banking/accounts/no-such-account/transactions",
        Some(&format!("Bearer {token}")),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let json: serde_json::Value = serde_json::from_str(&body_string(resp).await).unwrap();
    assert_eq!(
        json["errors"][0]["code"],
        "urn:au-cds:error:cds-all:Resource/NotFound"
    );
}

#[tokio::test]
async fn test_healthz_is_unauthenticated() {
    let resp = send("/healthz", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_string(resp).await, "ok");
}

#[tokio::test]
async fn test_every_response_carries_a_request_id() {
    let resp = send("/cds-au/v1/banking/accounts", Some("Bearer not-a-jwt")).await;
    assert!(resp.headers().get("x-request-id").is_some());
}
