use std::sync::Arc;

use super::certificate_authority::CertificateAuthorityService;
use crate::config::core_config;
use crate::provider::pkcs12::Pkcs12Validator;
use crate::repository::certificate_repository::CertificateRepository;

pub mod dto;
pub mod service;

pub(crate) mod encryption;
pub(crate) mod mapper;
pub(crate) mod validator;

#[derive(Clone)]
pub struct CertificateService {
    certificate_repository: Arc<dyn CertificateRepository>,
    pkcs12_validator: Arc<dyn Pkcs12Validator>,
    certificate_authority: CertificateAuthorityService,
    config: Arc<core_config::CoreConfig>,
}

impl CertificateService {
    pub fn new(
        certificate_repository: Arc<dyn CertificateRepository>,
        pkcs12_validator: Arc<dyn Pkcs12Validator>,
        certificate_authority: CertificateAuthorityService,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            certificate_repository,
            pkcs12_validator,
            certificate_authority,
            config,
        }
    }
}
