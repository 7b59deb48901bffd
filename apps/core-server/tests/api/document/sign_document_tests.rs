use serde_json::json;
use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

struct Setup {
    context: TestContext,
    document_id: String,
    certificate_id: String,
}

async fn setup() -> Setup {
    let context = TestContext::new().await;

    let resp = context
        .api
        .documents
        .upload("contrato.pdf", "application/pdf", fixtures::pdf())
        .await;
    assert_eq!(resp.status(), 201);
    let document_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context
        .api
        .certificates
        .upload("firma.p12", fixtures::pkcs12("Ana Perez", "secreto123"), "secreto123")
        .await;
    assert_eq!(resp.status(), 201);
    let certificate_id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    Setup {
        context,
        document_id,
        certificate_id,
    }
}

#[tokio::test]
async fn test_sign_document_missing_password() {
    let Setup {
        context,
        document_id,
        certificate_id,
    } = setup().await;

    let resp = context
        .api
        .documents
        .sign(
            &document_id,
            json!({ "certificateId": certificate_id, "password": "" }),
        )
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0008");
}

#[tokio::test]
async fn test_sign_document_with_certificate_of_other_user() {
    let Setup {
        context,
        document_id,
        ..
    } = setup().await;
    let other = context.api_for(Uuid::new_v4().into());
    let resp = other
        .certificates
        .upload("ajena.p12", fixtures::pkcs12("Luis", "secreto123"), "secreto123")
        .await;
    let foreign_certificate = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context
        .api
        .documents
        .sign(
            &document_id,
            json!({ "certificateId": foreign_certificate, "password": "secreto123" }),
        )
        .await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0001");
}

#[tokio::test]
async fn test_sign_unknown_document() {
    let Setup {
        context,
        certificate_id,
        ..
    } = setup().await;

    let resp = context
        .api
        .documents
        .sign(
            &Uuid::new_v4().to_string(),
            json!({
                "certificateId": certificate_id,
                "password": "secreto123",
                "position": { "page": 1, "x1": 100.0, "y1": 275.0, "x2": 250.0, "y2": 250.0 }
            }),
        )
        .await;

    assert_eq!(resp.status(), 404);
    assert_eq!(resp.error_code().await, "BR_0002");
}

#[tokio::test]
async fn test_sign_document_malformed_body() {
    let Setup {
        context,
        document_id,
        ..
    } = setup().await;

    let resp = context
        .api
        .documents
        .sign(&document_id, json!({ "password": "secreto123" }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0023");
}
