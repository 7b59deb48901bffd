use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_upload_certificate_success() {
    // GIVEN
    let context = TestContext::new().await;
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    // WHEN
    let resp = context
        .api
        .certificates
        .upload("firma.p12", content, "secreto123")
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context.api.certificates.get(&id).await;
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["id"], id);
    assert_eq!(body["fileName"], "firma.p12");
    assert_eq!(body["alias"], "Ana Perez");
    assert_eq!(body["isSystem"], false);
    assert_eq!(body["encrypted"], true);
    assert_eq!(body["userId"], context.api.user_id.to_string());
}

#[tokio::test]
async fn test_upload_certificate_wrong_password() {
    let context = TestContext::new().await;
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    let resp = context
        .api
        .certificates
        .upload("firma.p12", content, "otra-clave")
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0005");
}

#[tokio::test]
async fn test_upload_certificate_wrong_extension() {
    let context = TestContext::new().await;
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    let resp = context
        .api
        .certificates
        .upload("firma.pfx", content, "secreto123")
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0007");
}

#[tokio::test]
async fn test_upload_certificate_missing_password() {
    let context = TestContext::new().await;
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    let resp = context
        .api
        .certificates
        .upload("firma.p12", content, "")
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0008");
}

#[tokio::test]
async fn test_upload_certificate_duplicate_file_name() {
    let context = TestContext::new().await;
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    let resp = context
        .api
        .certificates
        .upload("firma.p12", content.clone(), "secreto123")
        .await;
    assert_eq!(resp.status(), 201);

    let resp = context
        .api
        .certificates
        .upload("firma.p12", content, "secreto123")
        .await;
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0003");
}

#[tokio::test]
async fn test_upload_same_file_name_for_different_users() {
    let context = TestContext::new().await;
    let other = context.api_for(uuid::Uuid::new_v4().into());
    let content = fixtures::pkcs12("Ana Perez", "secreto123");

    let resp = context
        .api
        .certificates
        .upload("firma.p12", content.clone(), "secreto123")
        .await;
    assert_eq!(resp.status(), 201);

    let resp = other
        .certificates
        .upload("firma.p12", content, "secreto123")
        .await;
    assert_eq!(resp.status(), 201);
}

#[tokio::test]
async fn test_upload_certificate_too_small() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .upload("firma.p12", vec![0x30; 16], "secreto123")
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0010");
}
