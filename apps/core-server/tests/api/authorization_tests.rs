use reqwest::StatusCode;

use crate::fixtures;
use crate::utils::api_clients::http_client;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_health_is_unprotected() {
    let context = TestContext::new().await;

    let resp = http_client()
        .get(format!("{}/health", context.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let context = TestContext::new().await;

    let resp = http_client()
        .get(format!("{}/api/certificate/v1", context.base_url))
        .header("X-User-Id", context.api.user_id.to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let context = TestContext::new().await;

    let resp = http_client()
        .get(format!("{}/api/document/v1", context.base_url))
        .bearer_auth("wrong")
        .header("X-User-Id", context.api.user_id.to_string())
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_user_header_is_rejected() {
    let context = TestContext::new().await;

    let resp = http_client()
        .get(format!("{}/api/document/v1", context.base_url))
        .bearer_auth(fixtures::AUTH_TOKEN)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "BR_0023");
}

#[tokio::test]
async fn test_swagger_disabled_by_default() {
    let context = TestContext::new().await;

    let resp = http_client()
        .get(format!("{}/api-docs/openapi.json", context.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
