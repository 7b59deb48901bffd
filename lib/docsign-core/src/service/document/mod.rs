use std::sync::Arc;

use crate::config::core_config;
use crate::repository::document_repository::DocumentRepository;

pub mod dto;
pub mod service;

pub(crate) mod validator;

#[derive(Clone)]
pub struct DocumentService {
    document_repository: Arc<dyn DocumentRepository>,
    config: Arc<core_config::CoreConfig>,
}

impl DocumentService {
    pub fn new(
        document_repository: Arc<dyn DocumentRepository>,
        config: Arc<core_config::CoreConfig>,
    ) -> Self {
        Self {
            document_repository,
            config,
        }
    }
}
