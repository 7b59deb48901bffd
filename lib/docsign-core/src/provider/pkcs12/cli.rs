use std::time::Duration;

use async_trait::async_trait;
use secrecy::SecretString;

use super::{Pkcs12Summary, Pkcs12ValidationError, Pkcs12Validator};
use crate::provider::openssl_cli::OpensslCli;

/// Shells out to `openssl pkcs12 -info` and classifies the failure from stderr.
/// Does not report certificate metadata.
pub struct OpensslCliPkcs12Validator {
    openssl: OpensslCli,
    timeout: Duration,
}

impl OpensslCliPkcs12Validator {
    pub fn new(openssl: OpensslCli, timeout: Duration) -> Self {
        Self { openssl, timeout }
    }
}

#[async_trait]
impl Pkcs12Validator for OpensslCliPkcs12Validator {
    async fn validate(
        &self,
        content: &[u8],
        password: &SecretString,
    ) -> Result<Pkcs12Summary, Pkcs12ValidationError> {
        let workdir = tempfile::Builder::new()
            .prefix("pkcs12_validate_")
            .tempdir()
            .map_err(|err| Pkcs12ValidationError::Failed(err.to_string()))?;

        let path = workdir.path().join("certificate.p12");
        tokio::fs::write(&path, content)
            .await
            .map_err(|err| Pkcs12ValidationError::Failed(err.to_string()))?;

        let output = self
            .openssl
            .pkcs12_info(&path, password, self.timeout)
            .await
            .map_err(|err| Pkcs12ValidationError::Failed(err.to_string()))?;

        if output.success() {
            return Ok(Pkcs12Summary::default());
        }

        tracing::debug!(stderr = %output.stderr, "openssl rejected PKCS#12");
        Err(classify_stderr(&output.stderr))
    }
}

pub(super) fn classify_stderr(stderr: &str) -> Pkcs12ValidationError {
    if stderr.contains("Mac verify error") {
        return Pkcs12ValidationError::WrongPassword;
    }

    if stderr.contains("unable to load PKCS12 object") || stderr.contains("Could not read PKCS12")
    {
        return Pkcs12ValidationError::Malformed(stderr.trim().to_owned());
    }

    // openssl gives no way to tell these apart
    Pkcs12ValidationError::WrongPassword
}
