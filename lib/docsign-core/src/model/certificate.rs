use serde::{Deserialize, Serialize};
use shared_types::{CertificateId, UserId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

pub const DEFAULT_CERTIFICATE_TYPE: &str = "p12";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Certificate {
    pub id: CertificateId,
    pub user_id: UserId,
    pub file_name: String,
    pub certificate_type: String,
    pub alias: Option<String>,
    pub issuer: Option<String>,
    pub valid_from: Option<OffsetDateTime>,
    pub valid_to: Option<OffsetDateTime>,
    pub is_system: bool,
    /// `None` for plaintext system certificates
    pub encryption: Option<CertificateEncryption>,
    pub data: Vec<u8>,
    pub created_date: OffsetDateTime,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CertificateEncryption {
    pub scheme: EncryptionScheme,
    /// hex
    pub salt: String,
    /// hex
    pub iv: String,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq, Serialize, Deserialize)]
pub enum EncryptionScheme {
    #[serde(rename = "PBKDF2_SHA512_AES256_CBC")]
    #[strum(serialize = "PBKDF2_SHA512_AES256_CBC")]
    Pbkdf2Sha512Aes256Cbc,
}
