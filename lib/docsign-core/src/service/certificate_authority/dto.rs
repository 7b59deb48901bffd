use std::path::PathBuf;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateAuthorityPaths {
    pub directory: PathBuf,
    pub certificate: PathBuf,
    pub private_key: PathBuf,
    pub serial: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateProfile {
    /// client auth and e-mail protection, CA certificate bundled
    #[default]
    Standard,
    /// non-repudiation key usage for PDF signatures
    PdfSigning,
}

/// Distinguished name of an issued certificate. Values must already be sanitised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateSubject {
    pub country: String,
    pub state: String,
    pub locality: String,
    pub organization: String,
    pub organizational_unit: String,
    pub common_name: String,
    pub email: Option<String>,
}

#[derive(Debug)]
pub struct IssueCertificateRequest {
    pub subject: CertificateSubject,
    pub profile: CertificateProfile,
    pub password: SecretString,
    pub validity_days: u32,
}
