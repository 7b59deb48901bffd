use async_trait::async_trait;
use shared_types::{CertificateId, UserId};

use crate::model::certificate::Certificate;
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait CertificateRepository: Send + Sync {
    async fn create(&self, request: Certificate) -> Result<CertificateId, DataLayerError>;

    async fn get(&self, id: &CertificateId) -> Result<Option<Certificate>, DataLayerError>;

    async fn get_by_user_and_file_name(
        &self,
        user_id: &UserId,
        file_name: &str,
    ) -> Result<Option<Certificate>, DataLayerError>;

    /// Newest first
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Certificate>, DataLayerError>;

    /// Fails with [`DataLayerError::RecordNotUpdated`] when no certificate `id` owned by `user_id` exists
    async fn delete(&self, id: &CertificateId, user_id: &UserId) -> Result<(), DataLayerError>;
}
