use openssl::nid::Nid;
use openssl::pkcs12::Pkcs12;
use openssl::x509::{X509, X509NameRef};
use serde_json::json;

use crate::utils::api_clients::Response;
use crate::utils::context::TestContext;

fn common_name(name: &X509NameRef) -> String {
    name.entries_by_nid(Nid::COMMONNAME)
        .next()
        .unwrap()
        .data()
        .as_utf8()
        .unwrap()
        .to_string()
}

fn open_pkcs12(content: &[u8], password: &str) -> (X509, Vec<X509>) {
    let parsed = Pkcs12::from_der(content).unwrap().parse2(password).unwrap();
    assert!(parsed.pkey.is_some());
    let chain = parsed
        .ca
        .map(|stack| stack.into_iter().collect())
        .unwrap_or_default();
    (parsed.cert.unwrap(), chain)
}

async fn generate_pdf_signing(context: &TestContext, common_name: &str) -> Response {
    context
        .api
        .certificates
        .generate(json!({
            "profile": "PDF_SIGNING",
            "commonName": common_name,
            "password": "secreto123",
        }))
        .await
}

#[tokio::test]
async fn test_generate_certificate_success() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let resp = context
        .api
        .certificates
        .generate(json!({
            "profile": "STANDARD",
            "commonName": "José Pérez",
            "email": "jose@example.com",
            "organization": "Compañía Ñandú",
            "password": "secreto123",
        }))
        .await;

    // THEN
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.header("content-type").as_deref(),
        Some("application/x-pkcs12")
    );
    assert_eq!(
        resp.header("content-disposition").as_deref(),
        Some(
            "attachment; filename=\"certificado_Jos__P_rez.p12\"; \
             filename*=UTF-8''certificado_Jos%C3%A9_P%C3%A9rez.p12"
        )
    );
    let content = resp.bytes().await;

    let (certificate, chain) = open_pkcs12(&content, "secreto123");
    assert_eq!(common_name(certificate.subject_name()), "José Pérez");
    assert_eq!(common_name(certificate.issuer_name()), "Sistema CA");
    let organization = certificate
        .subject_name()
        .entries_by_nid(Nid::ORGANIZATIONNAME)
        .next()
        .unwrap()
        .data()
        .as_utf8()
        .unwrap()
        .to_string();
    assert_eq!(organization, "Compañía Ñandú");
    assert_eq!(chain.len(), 1);
    assert_eq!(common_name(chain[0].subject_name()), "Sistema CA");

    // uploading the issued file registers it as a system certificate
    let resp = context
        .api
        .certificates
        .upload("certificado_José_Pérez.p12", content, "secreto123")
        .await;
    assert_eq!(resp.status(), 201);
    let id = resp.json_value().await["id"].as_str().unwrap().to_owned();

    let resp = context.api.certificates.get(&id).await;
    assert_eq!(resp.status(), 200);
    let body = resp.json_value().await;
    assert_eq!(body["isSystem"], true);
    assert_eq!(body["encrypted"], false);

    let resp = context
        .api
        .certificates
        .validate_password(&id, "secreto123")
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.json_value().await["valid"], true);
}

#[tokio::test]
async fn test_generate_certificate_pdf_signing_profile() {
    let context = TestContext::new().await;

    let resp = generate_pdf_signing(&context, "Ana Perez").await;

    assert_eq!(resp.status(), 200);
    let (certificate, chain) = open_pkcs12(&resp.bytes().await, "secreto123");
    assert_eq!(common_name(certificate.subject_name()), "Ana Perez");
    assert!(chain.is_empty());
}

#[tokio::test]
async fn test_generate_certificate_concurrently_unique_serials() {
    let context = TestContext::new().await;

    let responses = tokio::join!(
        generate_pdf_signing(&context, "Ana Perez"),
        generate_pdf_signing(&context, "Luis Gomez"),
        generate_pdf_signing(&context, "Maria Lopez"),
        generate_pdf_signing(&context, "Pedro Ruiz"),
    );

    let mut serials = vec![];
    for resp in [responses.0, responses.1, responses.2, responses.3] {
        assert_eq!(resp.status(), 200);
        let (certificate, _) = open_pkcs12(&resp.bytes().await, "secreto123");
        let serial = certificate.serial_number().to_bn().unwrap();
        serials.push(serial.to_hex_str().unwrap().to_string());
    }

    serials.sort();
    serials.dedup();
    assert_eq!(serials.len(), 4);
}

#[tokio::test]
async fn test_generate_certificate_requires_email_for_standard_profile() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .generate(json!({
            "commonName": "Ana Perez",
            "password": "secreto123",
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0011");
}

#[tokio::test]
async fn test_generate_certificate_requires_common_name() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .generate(json!({
            "profile": "PDF_SIGNING",
            "password": "secreto123",
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0011");
}

#[tokio::test]
async fn test_generate_certificate_password_too_short() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .generate(json!({
            "profile": "PDF_SIGNING",
            "commonName": "Ana Perez",
            "password": "123",
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0009");
}

#[tokio::test]
async fn test_generate_certificate_unknown_profile() {
    let context = TestContext::new().await;

    let resp = context
        .api
        .certificates
        .generate(json!({
            "profile": "SERVER",
            "commonName": "Ana Perez",
            "password": "secreto123",
        }))
        .await;

    assert_eq!(resp.status(), 400);
    assert_eq!(resp.error_code().await, "BR_0023");
}
