use secrecy::{ExposeSecret, SecretString};

use crate::service::error::ValidationError;

pub(super) const MIN_CERTIFICATE_SIZE: usize = 100;
pub(super) const MIN_GENERATED_PASSWORD_LENGTH: usize = 6;

pub(super) fn validate_certificate_file_name(file_name: &str) -> Result<(), ValidationError> {
    if !file_name.to_lowercase().ends_with(".p12") {
        return Err(ValidationError::InvalidCertificateFileName(
            file_name.to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_password_present(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

pub(super) fn validate_certificate_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.len() < MIN_CERTIFICATE_SIZE {
        return Err(ValidationError::CertificateTooSmall {
            size: content.len(),
        });
    }
    Ok(())
}

pub(super) fn validate_generated_password(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().chars().count() < MIN_GENERATED_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_GENERATED_PASSWORD_LENGTH,
        });
    }
    Ok(())
}
