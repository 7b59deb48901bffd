use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_list_certificates_only_returns_own() {
    // GIVEN
    let context = TestContext::new().await;
    let other = context.api_for(Uuid::new_v4().into());

    for name in ["firma.p12", "firma-2.p12"] {
        let resp = context
            .api
            .certificates
            .upload(name, fixtures::pkcs12("Ana Perez", "secreto123"), "secreto123")
            .await;
        assert_eq!(resp.status(), 201);
    }
    let resp = other
        .certificates
        .upload("ajena.p12", fixtures::pkcs12("Luis", "secreto123"), "secreto123")
        .await;
    assert_eq!(resp.status(), 201);

    // WHEN
    let resp = context.api.certificates.list().await;

    // THEN
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["fileName"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"firma.p12".to_string()));
    assert!(names.contains(&"firma-2.p12".to_string()));
}

#[tokio::test]
async fn test_get_certificate_of_other_user_not_found() {
    let context = TestContext::new().await;
    let other = context.api_for(Uuid::new_v4().into());

    let resp = context
        .api
        .certificates
        .upload("firma.p12", fixtures::pkcs12("Ana Perez", "secreto123"), "secreto123")
        .await;
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = other.certificates.get(&id).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0001");
}

#[tokio::test]
async fn test_get_certificate_invalid_id() {
    let context = TestContext::new().await;

    let resp = context.api.certificates.get("not-a-uuid").await;
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0023");
}

#[tokio::test]
async fn test_delete_certificate() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .upload("firma.p12", fixtures::pkcs12("Ana Perez", "secreto123"), "secreto123")
        .await;
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context.api.certificates.delete(&id).await;
    assert_eq!(resp.status(), 204);

    let resp = context.api.certificates.get(&id).await;
    assert_eq!(resp.status(), 404);

    let resp = context.api.certificates.delete(&id).await;
    assert_eq!(resp.status(), 404);
}
