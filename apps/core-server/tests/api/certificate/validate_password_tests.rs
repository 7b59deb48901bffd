use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

async fn upload(context: &TestContext) -> String {
    let resp = context
        .api
        .certificates
        .upload("firma.p12", fixtures::pkcs12("Ana Perez", "secreto123"), "secreto123")
        .await;
    assert_eq!(resp.status(), 201);
    resp.json_value().await["id"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn test_validate_password_success() {
    let context = TestContext::new().await;
    let id = upload(&context).await;

    let resp = context
        .api
        .certificates
        .validate_password(&id, "secreto123")
        .await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["valid"], true);
}

#[tokio::test]
async fn test_validate_password_wrong_password() {
    let context = TestContext::new().await;
    let id = upload(&context).await;

    let resp = context
        .api
        .certificates
        .validate_password(&id, "otra-clave")
        .await;

    // a wrong key either fails the padding check or yields bytes that are not the container
    assert_eq!(resp.status(), 400);
    let code = resp.error_code().await;
    assert!(code == "BR_0005" || code == "BR_0006", "{code}");
}

#[tokio::test]
async fn test_validate_password_empty() {
    let context = TestContext::new().await;
    let id = upload(&context).await;

    let resp = context.api.certificates.validate_password(&id, "").await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0008");
}

#[tokio::test]
async fn test_validate_password_of_other_user() {
    let context = TestContext::new().await;
    let id = upload(&context).await;
    let other = context.api_for(Uuid::new_v4().into());

    let resp = other
        .certificates
        .validate_password(&id, "secreto123")
        .await;

    assert_eq!(resp.status(), 404);
}
