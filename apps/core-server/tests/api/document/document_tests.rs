use uuid::Uuid;

use crate::fixtures;
use crate::utils::context::TestContext;

#[tokio::test]
async fn test_upload_document_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .documents
        .upload("contrato.pdf", "application/pdf", fixtures::pdf())
        .await;

    // THEN
    assert_eq!(resp.status(), 201);
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context.api.documents.get(&id).await;
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["originalName"], "contrato.pdf");
    assert_eq!(body["fileName"], format!("{id}.pdf"));
    assert_eq!(body["mimeType"], "application/pdf");
    assert_eq!(body["size"], fixtures::pdf().len());
    assert_eq!(body["state"], "PENDING");
    assert!(body["signedDate"].is_null());

    let stored = context
        .work_dir
        .path()
        .join("documents")
        .join(format!("{id}.pdf"));
    assert_eq!(std::fs::read(stored).unwrap(), fixtures::pdf());
}

#[tokio::test]
async fn test_upload_document_not_pdf() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .documents
        .upload("notas.txt", "text/plain", b"hola".to_vec())
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0013");
}

#[tokio::test]
async fn test_upload_document_too_large() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .documents
        .upload("grande.pdf", "application/pdf", vec![b'%'; 1024 * 1024 + 1])
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0014");
}

#[tokio::test]
async fn test_list_and_delete_documents() {
    let context = TestContext::new().await;
    let other = context.api_for(Uuid::new_v4().into());

    let resp = context
        .api
        .documents
        .upload("contrato.pdf", "application/pdf", fixtures::pdf())
        .await;
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();
    other
        .documents
        .upload("ajeno.pdf", "application/pdf", fixtures::pdf())
        .await;

    let resp = context.api.documents.list().await;
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], id);

    let resp = other.documents.delete(&id).await;
    assert_eq!(resp.status(), 404);

    let resp = context.api.documents.delete(&id).await;
    assert_eq!(resp.status(), 204);

    let resp = context.api.documents.list().await;
    assert!(resp.json_value().await.as_array().unwrap().is_empty());
    assert!(
        !context
            .work_dir
            .path()
            .join("documents")
            .join(format!("{id}.pdf"))
            .exists()
    );
}

#[tokio::test]
async fn test_get_signed_document_not_signed() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .documents
        .upload("contrato.pdf", "application/pdf", fixtures::pdf())
        .await;
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context.api.documents.signed(&id).await;
    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0016");
}
