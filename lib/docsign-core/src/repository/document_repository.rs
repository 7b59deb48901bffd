use async_trait::async_trait;
use shared_types::{DocumentId, UserId};

use crate::model::document::{Document, UpdateDocumentRequest};
use crate::repository::error::DataLayerError;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn create(&self, request: Document) -> Result<DocumentId, DataLayerError>;

    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, DataLayerError>;

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Document>, DataLayerError>;

    async fn update(&self, request: UpdateDocumentRequest) -> Result<(), DataLayerError>;

    async fn delete(&self, id: &DocumentId, user_id: &UserId) -> Result<(), DataLayerError>;
}
