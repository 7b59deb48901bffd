use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;
use time::OffsetDateTime;

use super::openssl_cli::OpensslCli;
use crate::config::core_config::{Pkcs12ValidatorConfig, Pkcs12ValidatorType};

pub mod cli;
pub mod native;


/// Metadata of the leaf certificate, when the validator can read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pkcs12Summary {
    pub subject_common_name: Option<String>,
    pub issuer: Option<String>,
    pub valid_from: Option<OffsetDateTime>,
    pub valid_to: Option<OffsetDateTime>,
}

#[derive(Debug, Error)]
pub enum Pkcs12ValidationError {
    #[error("Wrong password")]
    WrongPassword,
    #[error("Malformed PKCS#12: {0}")]
    Malformed(String),
    #[error("Validation failed: {0}")]
    Failed(String),
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Pkcs12Validator: Send + Sync {
    async fn validate(
        &self,
        content: &[u8],
        password: &SecretString,
    ) -> Result<Pkcs12Summary, Pkcs12ValidationError>;
}

pub fn pkcs12_validator_from_config(
    config: &Pkcs12ValidatorConfig,
    openssl: OpensslCli,
) -> Arc<dyn Pkcs12Validator> {
    match config.r#type {
        Pkcs12ValidatorType::Native => Arc::new(native::NativePkcs12Validator),
        Pkcs12ValidatorType::OpensslCli => Arc::new(cli::OpensslCliPkcs12Validator::new(
            openssl,
            config.timeout,
        )),
    }
}
