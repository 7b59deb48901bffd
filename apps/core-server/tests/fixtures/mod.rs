use std::path::Path;

use core_server::ServerConfig;
use docsign_core::config::core_config::{
    AppConfig, CertificateAuthorityConfig, CoreConfig, StorageConfig,
};
use openssl::asn1::Asn1Time;
use openssl::bn::BigNum;
use openssl::hash::MessageDigest;
use openssl::pkcs12::Pkcs12;
use openssl::pkey::PKey;
use openssl::rsa::Rsa;
use openssl::x509::{X509, X509NameBuilder};
use sql_data_provider::DbConn;

pub const AUTH_TOKEN: &str = "test";

pub fn create_config(work_dir: &Path) -> AppConfig<ServerConfig> {
    AppConfig {
        core: CoreConfig {
            certificate_authority: CertificateAuthorityConfig {
                directory: work_dir.join("ca"),
                ..Default::default()
            },
            storage: StorageConfig {
                document_directory: work_dir.join("documents"),
                max_document_size: 1024 * 1024,
            },
            ..Default::default()
        },
        app: ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            auth_token: AUTH_TOKEN.to_string(),
            ..Default::default()
        },
    }
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(&config.app.database_url)
        .await
        .unwrap()
}

/// Self-signed PKCS#12 container protected by `password`.
pub fn pkcs12(common_name: &str, password: &str) -> Vec<u8> {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", common_name).unwrap();
    let name = name.build();

    let mut builder = X509::builder().unwrap();
    builder.set_version(2).unwrap();
    let serial = BigNum::from_u32(7).unwrap().to_asn1_integer().unwrap();
    builder.set_serial_number(&serial).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&pkey).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(30).unwrap())
        .unwrap();
    builder.sign(&pkey, MessageDigest::sha256()).unwrap();

    Pkcs12::builder()
        .name(common_name)
        .pkey(&pkey)
        .cert(&builder.build())
        .build2(password)
        .unwrap()
        .to_der()
        .unwrap()
}

pub fn pdf() -> Vec<u8> {
    b"%PDF-1.4\n1 0 obj << /Type /Catalog >> endobj\ntrailer << /Root 1 0 R >>\n%%EOF\n".to_vec()
}
