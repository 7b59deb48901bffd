use docsign_core::model::certificate::{
    Certificate, CertificateEncryption, DEFAULT_CERTIFICATE_TYPE, EncryptionScheme,
};
use docsign_core::model::document::{Document, DocumentState};
use sea_orm::DatabaseConnection;
use shared_types::UserId;
use time::macros::datetime;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::db_conn;

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub async fn setup_test_db() -> DatabaseConnection {
    db_conn("sqlite::memory:").await.unwrap()
}

pub fn dummy_certificate(user_id: UserId, file_name: &str) -> Certificate {
    Certificate {
        id: Uuid::new_v4().into(),
        user_id,
        file_name: file_name.to_string(),
        certificate_type: DEFAULT_CERTIFICATE_TYPE.to_string(),
        alias: Some("Ana Perez".to_string()),
        issuer: Some("Sistema CA".to_string()),
        valid_from: Some(get_dummy_date()),
        valid_to: Some(get_dummy_date() + Duration::days(365)),
        is_system: false,
        encryption: Some(CertificateEncryption {
            scheme: EncryptionScheme::Pbkdf2Sha512Aes256Cbc,
            salt: "00112233445566778899aabbccddeeff".to_string(),
            iv: "ffeeddccbbaa99887766554433221100".to_string(),
        }),
        data: vec![1, 2, 3, 4],
        created_date: get_dummy_date(),
    }
}

pub fn dummy_document(user_id: UserId) -> Document {
    Document {
        id: Uuid::new_v4().into(),
        user_id,
        original_name: "contrato.pdf".to_string(),
        file_name: "1700000000000-contrato.pdf".to_string(),
        path: "uploads/1700000000000-contrato.pdf".to_string(),
        size: 2048,
        mime_type: "application/pdf".to_string(),
        created_date: get_dummy_date(),
        state: DocumentState::Pending,
        signed_date: None,
        signed_by: None,
        signed_path: None,
    }
}
