use async_trait::async_trait;
use docsign_core::model::certificate::Certificate;
use docsign_core::repository::certificate_repository::CertificateRepository;
use docsign_core::repository::error::DataLayerError;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{CertificateId, UserId};

use super::CertificateProvider;
use crate::entity::certificate;
use crate::mapper::to_data_layer_error;

#[async_trait]
impl CertificateRepository for CertificateProvider {
    async fn create(&self, request: Certificate) -> Result<CertificateId, DataLayerError> {
        let certificate = certificate::ActiveModel::from(request)
            .insert(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(certificate.id)
    }

    async fn get(&self, id: &CertificateId) -> Result<Option<Certificate>, DataLayerError> {
        certificate::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .map(Certificate::try_from)
            .transpose()
    }

    async fn get_by_user_and_file_name(
        &self,
        user_id: &UserId,
        file_name: &str,
    ) -> Result<Option<Certificate>, DataLayerError> {
        certificate::Entity::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .filter(certificate::Column::FileName.eq(file_name))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .map(Certificate::try_from)
            .transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Certificate>, DataLayerError> {
        certificate::Entity::find()
            .filter(certificate::Column::UserId.eq(user_id))
            .order_by_desc(certificate::Column::CreatedDate)
            .order_by_desc(certificate::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .map(Certificate::try_from)
            .collect()
    }

    async fn delete(&self, id: &CertificateId, user_id: &UserId) -> Result<(), DataLayerError> {
        let result = certificate::Entity::delete_many()
            .filter(certificate::Column::Id.eq(id))
            .filter(certificate::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        if result.rows_affected == 0 {
            return Err(DataLayerError::RecordNotUpdated);
        }

        Ok(())
    }
}
