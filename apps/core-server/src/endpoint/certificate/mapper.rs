use docsign_core::service::certificate::dto::{
    GenerateCertificateRequestDTO, UploadCertificateRequestDTO,
};
use secrecy::SecretString;

use super::dto::GenerateCertificateRequestRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::extractor::UploadForm;

pub(super) const CERTIFICATE_PART: &str = "certificate";
pub(super) const PASSWORD_PART: &str = "password";

impl From<GenerateCertificateRequestRestDTO> for GenerateCertificateRequestDTO {
    fn from(value: GenerateCertificateRequestRestDTO) -> Self {
        Self {
            profile: value.profile.into(),
            common_name: value.common_name,
            email: value.email,
            organization: value.organization,
            organizational_unit: value.organizational_unit,
            locality: value.locality,
            state: value.state,
            country: value.country,
            password: value.password.map(SecretString::from),
            validity_days: value.validity_days,
        }
    }
}

pub(super) fn upload_request_from_form(
    mut form: UploadForm,
) -> Result<UploadCertificateRequestDTO, ErrorResponseRestDTO> {
    let file = form.take_file(CERTIFICATE_PART)?;
    let password = form.take_field(PASSWORD_PART).unwrap_or_default();

    Ok(UploadCertificateRequestDTO {
        file_name: file.file_name.unwrap_or_default(),
        content: file.content,
        password: SecretString::from(password),
    })
}
