use async_trait::async_trait;
use openssl::pkcs12::Pkcs12;
use secrecy::{ExposeSecret, SecretString};
use x509_parser::parse_x509_certificate;

use super::{Pkcs12Summary, Pkcs12ValidationError, Pkcs12Validator};

/// Parses the container in-process with libcrypto.
pub struct NativePkcs12Validator;

#[async_trait]
impl Pkcs12Validator for NativePkcs12Validator {
    async fn validate(
        &self,
        content: &[u8],
        password: &SecretString,
    ) -> Result<Pkcs12Summary, Pkcs12ValidationError> {
        let content = content.to_vec();
        let password = SecretString::from(password.expose_secret());

        tokio::task::spawn_blocking(move || parse_pkcs12(&content, &password))
            .await
            .map_err(|err| Pkcs12ValidationError::Failed(err.to_string()))?
    }
}

fn parse_pkcs12(
    content: &[u8],
    password: &SecretString,
) -> Result<Pkcs12Summary, Pkcs12ValidationError> {
    let pkcs12 = Pkcs12::from_der(content)
        .map_err(|err| Pkcs12ValidationError::Malformed(err.to_string()))?;

    // MAC verification happens here
    let parsed = pkcs12
        .parse2(password.expose_secret())
        .map_err(|_| Pkcs12ValidationError::WrongPassword)?;

    let Some(certificate) = parsed.cert else {
        return Ok(Pkcs12Summary::default());
    };

    let der = certificate
        .to_der()
        .map_err(|err| Pkcs12ValidationError::Failed(err.to_string()))?;

    summary_from_der(&der)
}

pub(crate) fn summary_from_der(der: &[u8]) -> Result<Pkcs12Summary, Pkcs12ValidationError> {
    let (_, certificate) = parse_x509_certificate(der)
        .map_err(|err| Pkcs12ValidationError::Malformed(err.to_string()))?;

    let subject_common_name = certificate
        .subject()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(ToString::to_string);

    let issuer = certificate
        .issuer()
        .iter_common_name()
        .next()
        .and_then(|cn| cn.as_str().ok())
        .map(ToString::to_string)
        .or_else(|| Some(certificate.issuer().to_string()));

    let validity = certificate.validity();

    Ok(Pkcs12Summary {
        subject_common_name,
        issuer,
        valid_from: Some(validity.not_before.to_datetime()),
        valid_to: Some(validity.not_after.to_datetime()),
    })
}
