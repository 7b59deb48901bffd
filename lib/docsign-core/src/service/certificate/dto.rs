use secrecy::SecretString;
use shared_types::{CertificateId, UserId};
use time::OffsetDateTime;

pub use crate::service::certificate_authority::dto::CertificateProfile;

#[derive(Debug)]
pub struct UploadCertificateRequestDTO {
    pub file_name: String,
    pub content: Vec<u8>,
    pub password: SecretString,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateResponseDTO {
    pub id: CertificateId,
    pub user_id: UserId,
    pub file_name: String,
    pub certificate_type: String,
    pub alias: String,
    pub issuer: String,
    pub valid_from: Option<OffsetDateTime>,
    pub valid_to: Option<OffsetDateTime>,
    pub is_system: bool,
    pub encrypted: bool,
    pub created_date: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct GenerateCertificateRequestDTO {
    pub profile: CertificateProfile,
    pub common_name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub locality: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub password: Option<SecretString>,
    pub validity_days: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct GeneratedCertificateDTO {
    pub file_name: String,
    /// PKCS#12, protected by the requested password
    pub content: Vec<u8>,
}
