use std::sync::Arc;

pub mod certificate_repository;
pub mod document_repository;
pub mod error;

use certificate_repository::CertificateRepository;
use document_repository::DocumentRepository;

pub trait DataRepository: Send + Sync {
    fn get_certificate_repository(&self) -> Arc<dyn CertificateRepository>;
    fn get_document_repository(&self) -> Arc<dyn DocumentRepository>;
}
