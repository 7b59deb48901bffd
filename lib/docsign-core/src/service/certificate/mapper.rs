use shared_types::UserId;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use super::dto::{CertificateProfile, CertificateResponseDTO, GenerateCertificateRequestDTO};
use crate::model::certificate::{Certificate, DEFAULT_CERTIFICATE_TYPE};
use crate::provider::pkcs12::Pkcs12Summary;
use crate::service::certificate::encryption::EncryptedCertificate;
use crate::service::certificate_authority::dto::CertificateSubject;
use crate::service::error::ValidationError;

pub(crate) const SYSTEM_ISSUER: &str = "Sistema de Firma Digital";
const SYSTEM_VALIDITY: Duration = Duration::days(365);
const MAX_SUBJECT_FIELD_LENGTH: usize = 64;

/// Certificates issued by this system are named `certificado_<name>.p12`.
pub(super) fn is_system_certificate(file_name: &str) -> bool {
    file_name.contains("certificado_") && file_name.contains(".p12")
}

pub(super) fn generated_file_name(common_name: &str) -> String {
    format!(
        "certificado_{}.p12",
        common_name.split_whitespace().collect::<Vec<_>>().join("_")
    )
}

pub(super) fn system_certificate(
    user_id: UserId,
    file_name: String,
    content: Vec<u8>,
    summary: Pkcs12Summary,
) -> Certificate {
    let now = OffsetDateTime::now_utc();
    Certificate {
        id: Uuid::new_v4().into(),
        user_id,
        alias: Some(file_name.replace(".p12", "")),
        file_name,
        certificate_type: DEFAULT_CERTIFICATE_TYPE.to_string(),
        issuer: Some(summary.issuer.unwrap_or_else(|| SYSTEM_ISSUER.to_string())),
        valid_from: Some(summary.valid_from.unwrap_or(now)),
        valid_to: Some(summary.valid_to.unwrap_or(now + SYSTEM_VALIDITY)),
        is_system: true,
        encryption: None,
        data: content,
        created_date: now,
    }
}

pub(super) fn encrypted_certificate(
    user_id: UserId,
    file_name: String,
    encrypted: EncryptedCertificate,
    summary: Pkcs12Summary,
) -> Certificate {
    Certificate {
        id: Uuid::new_v4().into(),
        user_id,
        file_name,
        certificate_type: DEFAULT_CERTIFICATE_TYPE.to_string(),
        alias: summary.subject_common_name,
        issuer: summary.issuer,
        valid_from: summary.valid_from,
        valid_to: summary.valid_to,
        is_system: false,
        encryption: Some(encrypted.encryption),
        data: encrypted.data,
        created_date: OffsetDateTime::now_utc(),
    }
}

impl From<Certificate> for CertificateResponseDTO {
    fn from(value: Certificate) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            alias: value.alias.unwrap_or_else(|| value.file_name.to_owned()),
            issuer: value.issuer.unwrap_or_else(|| SYSTEM_ISSUER.to_string()),
            file_name: value.file_name,
            certificate_type: value.certificate_type,
            valid_from: value.valid_from,
            valid_to: value.valid_to,
            is_system: value.is_system,
            encrypted: value.encryption.is_some(),
            created_date: value.created_date,
        }
    }
}

/// Letters, digits and spaces only; the values end up in an openssl config file.
fn sanitize_text(value: &str, max_length: usize) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect::<String>()
        .trim()
        .chars()
        .take(max_length)
        .collect::<String>()
        .trim_end()
        .to_owned()
}

fn sanitize_email(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '@' | '.' | '-'))
        .take(MAX_SUBJECT_FIELD_LENGTH)
        .collect()
}

fn sanitize_country(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphabetic)
        .take(2)
        .collect()
}

fn field_or(value: Option<&String>, default: &str, max_length: usize) -> String {
    let sanitized = value
        .map(|value| sanitize_text(value, max_length))
        .unwrap_or_default();

    if sanitized.is_empty() {
        sanitize_text(default, max_length)
    } else {
        sanitized
    }
}

struct SubjectDefaults {
    country: &'static str,
    state: &'static str,
    state_length: usize,
    locality: &'static str,
    organization: &'static str,
    organizational_unit: &'static str,
    email: Option<&'static str>,
}

const STANDARD_DEFAULTS: SubjectDefaults = SubjectDefaults {
    country: "MX",
    state: "Estado de México",
    state_length: MAX_SUBJECT_FIELD_LENGTH,
    locality: "Ciudad de México",
    organization: "Usuario",
    organizational_unit: "Usuario",
    email: None,
};

const PDF_SIGNING_DEFAULTS: SubjectDefaults = SubjectDefaults {
    country: "EC",
    state: "Guayas",
    state_length: 2,
    locality: "Guayaquil",
    organization: "Test Organization",
    organizational_unit: "IT",
    email: Some("test@example.com"),
};

pub(super) fn subject_from_request(
    request: &GenerateCertificateRequestDTO,
) -> Result<CertificateSubject, ValidationError> {
    let defaults = match request.profile {
        CertificateProfile::Standard => STANDARD_DEFAULTS,
        CertificateProfile::PdfSigning => PDF_SIGNING_DEFAULTS,
    };

    let common_name = request
        .common_name
        .as_deref()
        .map(|value| sanitize_text(value, MAX_SUBJECT_FIELD_LENGTH))
        .filter(|value| !value.is_empty())
        .ok_or(ValidationError::MissingField("commonName"))?;

    let email = request
        .email
        .as_deref()
        .map(sanitize_email)
        .filter(|value| !value.is_empty())
        .or_else(|| defaults.email.map(ToString::to_string));

    let country = request
        .country
        .as_deref()
        .map(sanitize_country)
        .filter(|value| value.len() == 2)
        .unwrap_or_else(|| defaults.country.to_string());

    Ok(CertificateSubject {
        country,
        state: field_or(request.state.as_ref(), defaults.state, defaults.state_length),
        locality: field_or(
            request.locality.as_ref(),
            defaults.locality,
            MAX_SUBJECT_FIELD_LENGTH,
        ),
        organization: field_or(
            request.organization.as_ref(),
            defaults.organization,
            MAX_SUBJECT_FIELD_LENGTH,
        ),
        organizational_unit: field_or(
            request.organizational_unit.as_ref(),
            defaults.organizational_unit,
            MAX_SUBJECT_FIELD_LENGTH,
        ),
        common_name,
        email,
    })
}
