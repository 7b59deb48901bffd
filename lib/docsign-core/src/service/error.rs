use docsign_crypto::encryption::EncryptionError;
use shared_types::{CertificateId, DocumentId};
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::provider::command::CommandError;
use crate::provider::pdf_signer::PdfSignerError;
use crate::provider::pkcs12::Pkcs12ValidationError;
use crate::repository::error::DataLayerError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Mapping error: `{0}`")]
    MappingError(String),

    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),
    #[error(transparent)]
    EntityAlreadyExists(#[from] EntityAlreadyExistsError),
    #[error(transparent)]
    BusinessLogic(#[from] BusinessLogicError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    ConfigValidation(#[from] ConfigValidationError),
    #[error(transparent)]
    Repository(#[from] DataLayerError),

    #[error("External command error: `{0}`")]
    Command(#[from] CommandError),
    #[error("PDF signer error: `{0}`")]
    PdfSigner(#[from] PdfSignerError),
    #[error("PKCS#12 validator failure: `{0}`")]
    Pkcs12Validator(String),
    #[error("Crypto error: `{0}`")]
    Crypto(String),
    #[error("Storage error: `{0}`")]
    Storage(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Certificate `{0}` not found")]
    Certificate(CertificateId),
    #[error("Document `{0}` not found")]
    Document(DocumentId),
    #[error("File of document `{0}` not found")]
    DocumentFile(DocumentId),
    #[error("Signed file of document `{0}` not found")]
    SignedDocumentFile(DocumentId),
}

#[derive(Debug, Error)]
pub enum EntityAlreadyExistsError {
    #[error("Certificate `{file_name}` already exists")]
    Certificate { file_name: String },
}

#[derive(Debug, Error)]
pub enum BusinessLogicError {
    #[error("Wrong certificate password")]
    WrongCertificatePassword,
    #[error("Certificate file is corrupt or not PKCS#12: {reason}")]
    MalformedCertificate { reason: String },
    #[error("Certificate authority not configured")]
    CertificateAuthorityNotConfigured,
    #[error("Document `{0}` is not signed")]
    DocumentNotSigned(DocumentId),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Certificate file `{0}` must have a .p12 extension")]
    InvalidCertificateFileName(String),
    #[error("Password is required")]
    MissingPassword,
    #[error("Password must have at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Certificate content of {size} bytes is too small")]
    CertificateTooSmall { size: usize },
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Unsupported document type `{0}`")]
    UnsupportedDocumentType(String),
    #[error("Document of {size} bytes exceeds the limit of {max} bytes")]
    DocumentTooLarge { size: u64, max: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum ErrorCode {
    BR_0000,
    BR_0001,
    BR_0002,
    BR_0003,
    BR_0004,
    BR_0005,
    BR_0006,
    BR_0007,
    BR_0008,
    BR_0009,
    BR_0010,
    BR_0011,
    BR_0012,
    BR_0013,
    BR_0014,
    BR_0015,
    BR_0016,
    BR_0017,
    BR_0018,
    BR_0019,
    BR_0020,
    BR_0021,
    BR_0022,
    BR_0023,
}

impl ErrorCode {
    pub const fn msg(&self) -> &'static str {
        match self {
            ErrorCode::BR_0000 => "Unspecified error",
            ErrorCode::BR_0001 => "Certificate not found",
            ErrorCode::BR_0002 => "Document not found",
            ErrorCode::BR_0003 => "Certificate already exists",
            ErrorCode::BR_0004 => "Database error",
            ErrorCode::BR_0005 => "Wrong certificate password",
            ErrorCode::BR_0006 => "Certificate file is corrupt or not PKCS#12",
            ErrorCode::BR_0007 => "Certificate file must be .p12",
            ErrorCode::BR_0008 => "Password is required",
            ErrorCode::BR_0009 => "Password too short",
            ErrorCode::BR_0010 => "Certificate content too small",
            ErrorCode::BR_0011 => "Missing required field",
            ErrorCode::BR_0012 => "Certificate authority not configured",
            ErrorCode::BR_0013 => "Unsupported document type",
            ErrorCode::BR_0014 => "Document too large",
            ErrorCode::BR_0015 => "Document file not found",
            ErrorCode::BR_0016 => "Document not signed",
            ErrorCode::BR_0017 => "External command failed",
            ErrorCode::BR_0018 => "PDF signing failed",
            ErrorCode::BR_0019 => "Storage error",
            ErrorCode::BR_0020 => "Crypto error",
            ErrorCode::BR_0021 => "Configuration error",
            ErrorCode::BR_0022 => "Response mapping error",
            ErrorCode::BR_0023 => "General input validation error",
        }
    }
}

impl ServiceError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ServiceError::EntityNotFound(error) => error.error_code(),
            ServiceError::EntityAlreadyExists(error) => error.error_code(),
            ServiceError::BusinessLogic(error) => error.error_code(),
            ServiceError::Validation(error) => error.error_code(),
            ServiceError::Repository(error) => error.error_code(),
            ServiceError::ConfigValidation(_) => ErrorCode::BR_0021,
            ServiceError::Command(_) | ServiceError::Pkcs12Validator(_) => ErrorCode::BR_0017,
            ServiceError::PdfSigner(_) => ErrorCode::BR_0018,
            ServiceError::Storage(_) => ErrorCode::BR_0019,
            ServiceError::Crypto(_) => ErrorCode::BR_0020,
            ServiceError::MappingError(_) => ErrorCode::BR_0022,
        }
    }
}

impl EntityNotFoundError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityNotFoundError::Certificate(_) => ErrorCode::BR_0001,
            EntityNotFoundError::Document(_) => ErrorCode::BR_0002,
            EntityNotFoundError::DocumentFile(_) | EntityNotFoundError::SignedDocumentFile(_) => {
                ErrorCode::BR_0015
            }
        }
    }
}

impl EntityAlreadyExistsError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EntityAlreadyExistsError::Certificate { .. } => ErrorCode::BR_0003,
        }
    }
}

impl BusinessLogicError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            BusinessLogicError::WrongCertificatePassword => ErrorCode::BR_0005,
            BusinessLogicError::MalformedCertificate { .. } => ErrorCode::BR_0006,
            BusinessLogicError::CertificateAuthorityNotConfigured => ErrorCode::BR_0012,
            BusinessLogicError::DocumentNotSigned(_) => ErrorCode::BR_0016,
        }
    }
}

impl ValidationError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidCertificateFileName(_) => ErrorCode::BR_0007,
            ValidationError::MissingPassword => ErrorCode::BR_0008,
            ValidationError::PasswordTooShort { .. } => ErrorCode::BR_0009,
            ValidationError::CertificateTooSmall { .. } => ErrorCode::BR_0010,
            ValidationError::MissingField(_) => ErrorCode::BR_0011,
            ValidationError::UnsupportedDocumentType(_) => ErrorCode::BR_0013,
            ValidationError::DocumentTooLarge { .. } => ErrorCode::BR_0014,
        }
    }
}

impl From<EncryptionError> for ServiceError {
    fn from(value: EncryptionError) -> Self {
        match value {
            EncryptionError::DecryptionFailed => BusinessLogicError::WrongCertificatePassword.into(),
            EncryptionError::Crypto(reason) => ServiceError::Crypto(reason),
        }
    }
}

impl From<Pkcs12ValidationError> for ServiceError {
    fn from(value: Pkcs12ValidationError) -> Self {
        match value {
            Pkcs12ValidationError::WrongPassword => {
                BusinessLogicError::WrongCertificatePassword.into()
            }
            Pkcs12ValidationError::Malformed(reason) => {
                BusinessLogicError::MalformedCertificate { reason }.into()
            }
            Pkcs12ValidationError::Failed(reason) => ServiceError::Pkcs12Validator(reason),
        }
    }
}
