use std::path::Path;

use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::hash::MessageDigest;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};
use shared_types::{CertificateId, DocumentId, UserId};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::certificate::{Certificate, DEFAULT_CERTIFICATE_TYPE};
use crate::model::document::{Document, DocumentState};
use crate::provider::command::{CommandOutput, CommandRequest};

/// Self-signed PKCS#12 container protected by `password`.
pub fn generate_pkcs12(common_name: &str, password: &str) -> Vec<u8> {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", common_name).unwrap();
    let name = name.build();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    let serial = BigNum::from_u32(1).unwrap().to_asn1_integer().unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&pkey).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    builder.sign(&pkey, MessageDigest::sha256()).unwrap();
    let certificate = builder.build();

    Pkcs12::builder()
        .name("docsign-test")
        .pkey(&pkey)
        .cert(&certificate)
        .build2(password)
        .unwrap()
        .to_der()
        .unwrap()
}

pub fn dummy_user() -> UserId {
    Uuid::new_v4().into()
}

pub fn dummy_certificate(user_id: UserId, data: Vec<u8>) -> Certificate {
    Certificate {
        id: CertificateId::from(Uuid::new_v4()),
        user_id,
        file_name: "firma.p12".to_string(),
        certificate_type: DEFAULT_CERTIFICATE_TYPE.to_string(),
        alias: None,
        issuer: None,
        valid_from: None,
        valid_to: None,
        is_system: false,
        encryption: None,
        data,
        created_date: OffsetDateTime::now_utc(),
    }
}

pub fn dummy_document(user_id: UserId, path: &Path) -> Document {
    Document {
        id: DocumentId::from(Uuid::new_v4()),
        user_id,
        original_name: "contrato.pdf".to_string(),
        file_name: "1700000000000-contrato.pdf".to_string(),
        path: path.to_string_lossy().into_owned(),
        size: 1024,
        mime_type: "application/pdf".to_string(),
        created_date: OffsetDateTime::now_utc(),
        state: DocumentState::Pending,
        signed_date: None,
        signed_by: None,
        signed_path: None,
    }
}

/// Value following `flag` in the argument list.
pub fn arg_after(request: &CommandRequest, flag: &str) -> Option<String> {
    request
        .args
        .iter()
        .position(|arg| arg == flag)
        .and_then(|index| request.args.get(index + 1))
        .map(|arg| arg.to_string_lossy().into_owned())
}

/// Plays the part of `openssl`: writes whatever `-out` names and succeeds.
pub fn fake_openssl(request: CommandRequest) -> CommandOutput {
    if let Some(out) = arg_after(&request, "-out") {
        std::fs::write(out, b"generated by fake openssl").unwrap();
    }

    CommandOutput {
        status: Some(0),
        ..Default::default()
    }
}
