use docsign_crypto::encryption::{decrypt_data, encrypt_data};
use secrecy::{ExposeSecret, SecretSlice, SecretString};

use crate::model::certificate::{Certificate, CertificateEncryption, EncryptionScheme};
use crate::service::error::ServiceError;

pub(crate) struct EncryptedCertificate {
    pub encryption: CertificateEncryption,
    pub data: Vec<u8>,
}

pub(crate) async fn encrypt_certificate(
    content: Vec<u8>,
    password: &SecretString,
) -> Result<EncryptedCertificate, ServiceError> {
    let password = SecretString::from(password.expose_secret());

    let payload = tokio::task::spawn_blocking(move || encrypt_data(&content, &password))
        .await
        .map_err(|err| ServiceError::Crypto(err.to_string()))??;

    Ok(EncryptedCertificate {
        encryption: CertificateEncryption {
            scheme: EncryptionScheme::Pbkdf2Sha512Aes256Cbc,
            salt: hex::encode(payload.salt),
            iv: hex::encode(payload.iv),
        },
        data: payload.ciphertext,
    })
}

/// Plaintext certificates are returned as stored, whatever the password.
pub(crate) async fn decrypt_certificate(
    certificate: Certificate,
    password: &SecretString,
) -> Result<SecretSlice<u8>, ServiceError> {
    let Some(encryption) = certificate.encryption else {
        return Ok(SecretSlice::from(certificate.data));
    };

    let salt =
        hex::decode(&encryption.salt).map_err(|err| ServiceError::MappingError(err.to_string()))?;
    let iv =
        hex::decode(&encryption.iv).map_err(|err| ServiceError::MappingError(err.to_string()))?;
    let password = SecretString::from(password.expose_secret());
    let data = certificate.data;

    let decrypted = match encryption.scheme {
        EncryptionScheme::Pbkdf2Sha512Aes256Cbc => {
            tokio::task::spawn_blocking(move || decrypt_data(&data, &password, &salt, &iv))
                .await
                .map_err(|err| ServiceError::Crypto(err.to_string()))??
        }
    };

    Ok(decrypted)
}
