use docsign_core::service::certificate::dto::{CertificateProfile, CertificateResponseDTO};
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{CertificateId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::{front_time, front_time_option};

#[derive(Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(CertificateResponseDTO)]
pub(crate) struct CertificateResponseRestDTO {
    pub id: CertificateId,
    pub user_id: UserId,
    /// Name of the uploaded or generated `.p12` file, unique per user
    pub file_name: String,
    pub certificate_type: String,
    /// Subject common name, or the file name when unknown
    pub alias: String,
    pub issuer: String,
    #[schema(value_type = Option<String>, example = "2023-06-09T14:19:57.000Z")]
    #[serde(serialize_with = "front_time_option")]
    pub valid_from: Option<OffsetDateTime>,
    #[schema(value_type = Option<String>, example = "2023-06-09T14:19:57.000Z")]
    #[serde(serialize_with = "front_time_option")]
    pub valid_to: Option<OffsetDateTime>,
    /// System certificates are stored without password-based encryption
    pub is_system: bool,
    pub encrypted: bool,
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    #[serde(serialize_with = "front_time")]
    pub created_date: OffsetDateTime,
}

/// Multipart form of a certificate upload
#[derive(ToSchema)]
#[allow(dead_code)]
pub(crate) struct UploadCertificateRequestRestDTO {
    /// PKCS#12 file, the file name must end with `.p12`
    #[schema(value_type = String, format = Binary)]
    pub certificate: Vec<u8>,
    /// Password protecting the PKCS#12 file
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(CertificateProfile)]
#[into(CertificateProfile)]
pub(crate) enum CertificateProfileRestEnum {
    #[default]
    Standard,
    PdfSigning,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateCertificateRequestRestDTO {
    /// `STANDARD` requires an e-mail, `PDF_SIGNING` fills missing subject fields with defaults
    #[serde(default)]
    pub profile: CertificateProfileRestEnum,
    pub common_name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub organizational_unit: Option<String>,
    pub locality: Option<String>,
    pub state: Option<String>,
    /// Two-letter country code
    pub country: Option<String>,
    /// Protects the generated PKCS#12, at least 6 characters
    pub password: Option<String>,
    pub validity_days: Option<u32>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateCertificatePasswordRequestRestDTO {
    pub password: String,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateCertificatePasswordResponseRestDTO {
    pub valid: bool,
}
