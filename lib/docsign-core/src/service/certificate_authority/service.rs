use std::path::{Path, PathBuf};

use super::CertificateAuthorityService;
use super::dto::{CertificateAuthorityPaths, CertificateProfile, IssueCertificateRequest};
use super::openssl_config::{CA_EXTENSIONS, REQUEST_EXTENSIONS, ca_config, request_config};
use crate::provider::openssl_cli::{Pkcs12ExportParams, SignRequestParams};
use crate::service::error::{BusinessLogicError, ServiceError};

const CA_CERTIFICATE: &str = "ca.crt";
const CA_PRIVATE_KEY: &str = "ca.key";
const CA_SERIAL: &str = "ca.srl";
const CA_CONFIG: &str = "ca.cnf";
const INITIAL_SERIAL: &str = "01";

const EPHEMERAL_CA_SUBJECT: &str = "/C=EC/ST=GS/L=Guayaquil/O=Test CA/CN=Test CA";
const EPHEMERAL_CA_VALIDITY_DAYS: u32 = 365;

impl CertificateAuthorityService {
    pub fn paths(&self) -> CertificateAuthorityPaths {
        let directory = self.config.directory.to_owned();
        CertificateAuthorityPaths {
            certificate: directory.join(CA_CERTIFICATE),
            private_key: directory.join(CA_PRIVATE_KEY),
            serial: directory.join(CA_SERIAL),
            directory,
        }
    }

    /// Creates the CA key pair and self-signed certificate unless both already exist.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn initialize(&self) -> Result<(), ServiceError> {
        let paths = self.paths();
        tokio::fs::create_dir_all(&paths.directory).await?;

        if exists(&paths.certificate).await && exists(&paths.private_key).await {
            tracing::info!(
                "Certificate authority found in {}",
                paths.directory.display()
            );
            return Ok(());
        }

        tracing::info!(
            "Generating certificate authority in {}",
            paths.directory.display()
        );

        self.openssl
            .generate_rsa_key(&paths.private_key, self.config.key_bits)
            .await?;

        let config_path = paths.directory.join(CA_CONFIG);
        tokio::fs::write(&config_path, ca_config(&self.config.subject)).await?;

        let result = self
            .openssl
            .self_sign_with_config(
                &paths.private_key,
                &config_path,
                CA_EXTENSIONS,
                self.config.validity_days,
                &paths.certificate,
            )
            .await;

        if let Err(err) = tokio::fs::remove_file(&config_path).await {
            tracing::warn!("Failed to remove {}: {err}", config_path.display());
        }
        result?;

        tokio::fs::write(&paths.serial, INITIAL_SERIAL).await?;

        tracing::info!("Certificate authority generated");
        Ok(())
    }

    pub async fn is_configured(&self) -> bool {
        let paths = self.paths();
        exists(&paths.certificate).await
            && exists(&paths.private_key).await
            && exists(&paths.serial).await
    }

    /// Configured and none of the CA files is empty
    pub async fn validate(&self) -> bool {
        let paths = self.paths();
        for path in [&paths.certificate, &paths.private_key, &paths.serial] {
            match tokio::fs::metadata(path).await {
                Ok(metadata) if metadata.len() > 0 => {}
                _ => return false,
            }
        }
        true
    }

    /// Issues a CA-signed certificate and returns it as a PKCS#12 container.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn issue_certificate(
        &self,
        request: IssueCertificateRequest,
    ) -> Result<Vec<u8>, ServiceError> {
        if !self.is_configured().await {
            return Err(BusinessLogicError::CertificateAuthorityNotConfigured.into());
        }

        let ca = self.paths();
        let workdir = tempfile::Builder::new().prefix("user_cert_").tempdir()?;

        let key = workdir.path().join("user.key");
        let config = workdir.path().join("user.cnf");
        let csr = workdir.path().join("user.csr");
        let certificate = workdir.path().join("user.crt");
        let pkcs12 = workdir.path().join("user.p12");

        self.openssl
            .generate_rsa_key(&key, self.config.key_bits)
            .await?;

        tokio::fs::write(&config, request_config(&request.subject, request.profile)).await?;

        self.openssl
            .create_signing_request(&key, &config, &csr)
            .await?;

        let serial_guard = self.serial_lock.lock().await;
        self.openssl
            .sign_request(SignRequestParams {
                csr: &csr,
                ca_certificate: &ca.certificate,
                ca_key: &ca.private_key,
                ca_serial: &ca.serial,
                days: request.validity_days,
                extensions_file: &config,
                extensions: REQUEST_EXTENSIONS,
                out: &certificate,
            })
            .await?;
        drop(serial_guard);

        let ca_certificate = match request.profile {
            CertificateProfile::Standard => Some(ca.certificate.as_path()),
            CertificateProfile::PdfSigning => None,
        };

        self.openssl
            .export_pkcs12(Pkcs12ExportParams {
                key: &key,
                certificate: &certificate,
                ca_certificate,
                password: &request.password,
                out: &pkcs12,
            })
            .await?;

        let content = tokio::fs::read(&pkcs12).await?;

        tracing::info!(
            profile = %request.profile,
            "Issued certificate for {}",
            request.subject.common_name
        );

        Ok(content)
    }

    /// Short-lived self-signed CA in `directory`; returns the certificate path.
    #[tracing::instrument(level = "debug", skip_all, err(Debug))]
    pub async fn create_ephemeral_ca(&self, directory: &Path) -> Result<PathBuf, ServiceError> {
        let key = directory.join(CA_PRIVATE_KEY);
        let certificate = directory.join(CA_CERTIFICATE);

        self.openssl
            .generate_rsa_key(&key, self.config.key_bits)
            .await?;
        self.openssl
            .self_sign_with_subject(
                &key,
                EPHEMERAL_CA_SUBJECT,
                EPHEMERAL_CA_VALIDITY_DAYS,
                &certificate,
            )
            .await?;

        Ok(certificate)
    }
}

async fn exists(path: &Path) -> bool {
    matches!(tokio::fs::try_exists(path).await, Ok(true))
}
