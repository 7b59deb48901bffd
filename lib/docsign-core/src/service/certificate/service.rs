use secrecy::{ExposeSecret, SecretSlice, SecretString};
use shared_types::{CertificateId, UserId};

use super::CertificateService;
use super::dto::{
    CertificateResponseDTO, GenerateCertificateRequestDTO, GeneratedCertificateDTO,
    UploadCertificateRequestDTO,
};
use super::encryption::{decrypt_certificate, encrypt_certificate};
use super::mapper::{
    encrypted_certificate, generated_file_name, is_system_certificate, subject_from_request,
    system_certificate,
};
use super::validator::{
    validate_certificate_content, validate_certificate_file_name, validate_generated_password,
    validate_password_present,
};
use crate::model::certificate::Certificate;
use crate::provider::pkcs12::Pkcs12ValidationError;
use crate::repository::error::DataLayerError;
use crate::service::certificate_authority::dto::{CertificateProfile, IssueCertificateRequest};
use crate::service::error::{
    BusinessLogicError, EntityAlreadyExistsError, EntityNotFoundError, ServiceError,
    ValidationError,
};

impl CertificateService {
    /// Stores an uploaded PKCS#12 file for `user_id`.
    ///
    /// Certificates issued by [`Self::generate_certificate`] are kept in plaintext,
    /// anything else is encrypted with a key derived from `password`.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn upload_certificate(
        &self,
        user_id: UserId,
        request: UploadCertificateRequestDTO,
    ) -> Result<CertificateId, ServiceError> {
        let UploadCertificateRequestDTO {
            file_name,
            content,
            password,
        } = request;

        validate_certificate_file_name(&file_name)?;
        self.check_file_name_available(&user_id, &file_name).await?;
        validate_password_present(&password)?;
        validate_certificate_content(&content)?;

        let summary = self.pkcs12_validator.validate(&content, &password).await?;

        let certificate = if is_system_certificate(&file_name) {
            system_certificate(user_id, file_name, content, summary)
        } else {
            let encrypted = encrypt_certificate(content, &password).await?;
            encrypted_certificate(user_id, file_name, encrypted, summary)
        };

        let is_system = certificate.is_system;
        let file_name = certificate.file_name.to_owned();

        let id = self
            .certificate_repository
            .create(certificate)
            .await
            .map_err(|err| match err {
                DataLayerError::AlreadyExists => {
                    EntityAlreadyExistsError::Certificate {
                        file_name: file_name.to_owned(),
                    }
                    .into()
                }
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, is_system, "Stored certificate {file_name}");
        Ok(id)
    }

    /// Returns the PKCS#12 bytes of certificate `id`.
    pub async fn decrypt_certificate(
        &self,
        id: &CertificateId,
        password: &SecretString,
    ) -> Result<SecretSlice<u8>, ServiceError> {
        let certificate = self
            .certificate_repository
            .get(id)
            .await?
            .ok_or(EntityNotFoundError::Certificate(*id))?;

        decrypt_certificate(certificate, password).await
    }

    /// Succeeds when `password` opens the stored certificate.
    pub async fn validate_certificate_password(
        &self,
        user_id: &UserId,
        id: &CertificateId,
        password: &SecretString,
    ) -> Result<(), ServiceError> {
        validate_password_present(password)?;
        let certificate = self.get_owned_certificate(user_id, id).await?;
        let encrypted = certificate.encryption.is_some();
        let content = decrypt_certificate(certificate, password).await?;

        match self
            .pkcs12_validator
            .validate(content.expose_secret(), password)
            .await
        {
            Ok(_) => Ok(()),
            // a wrong key can still yield valid padding, the plaintext is garbage then
            Err(Pkcs12ValidationError::Malformed(_)) if encrypted => {
                Err(BusinessLogicError::WrongCertificatePassword.into())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub async fn get_certificate_list(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CertificateResponseDTO>, ServiceError> {
        let certificates = self.certificate_repository.list_by_user(user_id).await?;
        Ok(certificates.into_iter().map(Into::into).collect())
    }

    pub async fn get_certificate(
        &self,
        user_id: &UserId,
        id: &CertificateId,
    ) -> Result<CertificateResponseDTO, ServiceError> {
        Ok(self.get_owned_certificate(user_id, id).await?.into())
    }

    pub async fn delete_certificate(
        &self,
        user_id: &UserId,
        id: &CertificateId,
    ) -> Result<(), ServiceError> {
        self.certificate_repository
            .delete(id, user_id)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Certificate(*id).into(),
                err => ServiceError::from(err),
            })?;

        tracing::info!(%id, "Deleted certificate");
        Ok(())
    }

    /// Issues a new certificate signed by the system CA. The result is not stored.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn generate_certificate(
        &self,
        user_id: &UserId,
        request: GenerateCertificateRequestDTO,
    ) -> Result<GeneratedCertificateDTO, ServiceError> {
        if request
            .common_name
            .as_deref()
            .is_none_or(|name| name.trim().is_empty())
        {
            return Err(ValidationError::MissingField("commonName").into());
        }
        if request.profile == CertificateProfile::Standard
            && request
                .email
                .as_deref()
                .is_none_or(|email| email.trim().is_empty())
        {
            return Err(ValidationError::MissingField("email").into());
        }
        let password = request
            .password
            .as_ref()
            .filter(|password| !password.expose_secret().is_empty())
            .ok_or(ValidationError::MissingPassword)?;
        validate_generated_password(password)?;

        let subject = subject_from_request(&request)?;
        let file_name = generated_file_name(&subject.common_name);
        self.check_file_name_available(user_id, &file_name).await?;

        let content = self
            .certificate_authority
            .issue_certificate(IssueCertificateRequest {
                subject,
                profile: request.profile,
                password: SecretString::from(password.expose_secret()),
                validity_days: request
                    .validity_days
                    .unwrap_or(self.config.certificate_authority.issued_validity_days),
            })
            .await?;

        Ok(GeneratedCertificateDTO { file_name, content })
    }

    async fn get_owned_certificate(
        &self,
        user_id: &UserId,
        id: &CertificateId,
    ) -> Result<Certificate, ServiceError> {
        self.certificate_repository
            .get(id)
            .await?
            .filter(|certificate| certificate.user_id == *user_id)
            .ok_or_else(|| EntityNotFoundError::Certificate(*id).into())
    }

    async fn check_file_name_available(
        &self,
        user_id: &UserId,
        file_name: &str,
    ) -> Result<(), ServiceError> {
        let existing = self
            .certificate_repository
            .get_by_user_and_file_name(user_id, file_name)
            .await?;

        if existing.is_some() {
            return Err(EntityAlreadyExistsError::Certificate {
                file_name: file_name.to_owned(),
            }
            .into());
        }
        Ok(())
    }
}
