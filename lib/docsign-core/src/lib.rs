use std::sync::Arc;

use config::ConfigValidationError;
use config::core_config::CoreConfig;
use provider::command::CommandRunner;
use provider::command::tokio_runner::TokioCommandRunner;
use provider::openssl_cli::OpensslCli;
use provider::pdf_signer::pyhanko::PyHankoPdfSigner;
use provider::pkcs12::pkcs12_validator_from_config;
use repository::DataRepository;
use service::certificate::CertificateService;
use service::certificate_authority::CertificateAuthorityService;
use service::document::DocumentService;
use service::document_signing::DocumentSigningService;

pub mod config;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[derive(Clone)]
pub struct DocsignCore {
    pub certificate_service: CertificateService,
    pub certificate_authority_service: CertificateAuthorityService,
    pub document_service: DocumentService,
    pub document_signing_service: DocumentSigningService,
}

impl DocsignCore {
    pub fn new(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
    ) -> Result<Self, ConfigValidationError> {
        Self::with_command_runner(data_provider, config, Arc::new(TokioCommandRunner))
    }

    /// Every external program (`openssl`, the pyHanko script) is started through `runner`.
    pub fn with_command_runner(
        data_provider: Arc<dyn DataRepository>,
        config: CoreConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let config = Arc::new(config);

        let certificate_repository = data_provider.get_certificate_repository();
        let document_repository = data_provider.get_document_repository();

        let openssl = OpensslCli::new(runner.clone(), &config.openssl);
        let pkcs12_validator = pkcs12_validator_from_config(&config.pkcs12_validator, openssl.clone());
        let pdf_signer = Arc::new(PyHankoPdfSigner::new(runner, &config.pdf_signer));

        let certificate_authority_service =
            CertificateAuthorityService::new(openssl, config.certificate_authority.to_owned());

        Ok(Self {
            certificate_service: CertificateService::new(
                certificate_repository.clone(),
                pkcs12_validator,
                certificate_authority_service.clone(),
                config.clone(),
            ),
            document_service: DocumentService::new(document_repository.clone(), config.clone()),
            document_signing_service: DocumentSigningService::new(
                document_repository,
                certificate_repository,
                certificate_authority_service.clone(),
                pdf_signer,
                config,
            ),
            certificate_authority_service,
        })
    }
}
