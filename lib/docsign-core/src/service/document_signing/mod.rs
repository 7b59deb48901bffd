use std::sync::Arc;

use super::certificate_authority::CertificateAuthorityService;
use crate::config::core_config;
use crate::provider::pdf_signer::PdfSigner;
use crate::repository::certificate_repository::CertificateRepository;
use crate::repository::document_repository::DocumentRepository;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct DocumentSigningService {
    document_repository: Arc<dyn DocumentRepository>,
    certificate_repository: Arc<dyn CertificateRepository>,
    certificate_authority: CertificateAuthorityService,
    pdf_signer: Arc<dyn PdfSigner>,
    config: Arc<core_config::CoreConfig>,
}

impl DocumentSigningService {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        certificate_repository: Arc<dyn CertificateRepository>,
        certificate_authority: CertificateAuthorityService,
        pdf_signer: Arc<dyn PdfSigner>,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            document_repository,
            certificate_repository,
            certificate_authority,
            pdf_signer,
            config,
        }
    }
}
