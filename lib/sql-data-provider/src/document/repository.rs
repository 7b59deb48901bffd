use async_trait::async_trait;
use docsign_core::model::document::{Document, UpdateDocumentRequest};
use docsign_core::repository::document_repository::DocumentRepository;
use docsign_core::repository::error::DataLayerError;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, Unchanged,
};
use shared_types::{DocumentId, UserId};

use super::DocumentProvider;
use crate::entity::document;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

#[async_trait]
impl DocumentRepository for DocumentProvider {
    async fn create(&self, request: Document) -> Result<DocumentId, DataLayerError> {
        let document = document::ActiveModel::try_from(request)?
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(document.id)
    }

    async fn get(&self, id: &DocumentId) -> Result<Option<Document>, DataLayerError> {
        document::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .map(Document::try_from)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Document>, DataLayerError> {
        document::Entity::find()
            .filter(document::Column::UserId.eq(user_id))
            .order_by_desc(document::Column::CreatedDate)
            .order_by_desc(document::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .map(Document::try_from)
            .collect()
    }

    async fn update(&self, request: UpdateDocumentRequest) -> Result<(), DataLayerError> {
        let update_model = document::ActiveModel {
            id: Unchanged(request.id),
            state: request
                .state
                .map(|state| Set(state.into()))
                .unwrap_or_default(),
            signed_date: request
                .signed_date
                .map(|date| Set(Some(date)))
                .unwrap_or_default(),
            signed_by: request
                .signed_by
                .map(|signed_by| Set(Some(signed_by)))
                .unwrap_or_default(),
            signed_path: request
                .signed_path
                .map(|path| Set(Some(path)))
                .unwrap_or_default(),
            ..Default::default()
        };

        update_model
            .update(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }

    async fn delete(&self, id: &DocumentId, user_id: &UserId) -> Result<(), DataLayerError> {
        let result = document::Entity::delete_many()
            .filter(document::Column::Id.eq(id))
            .filter(document::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
