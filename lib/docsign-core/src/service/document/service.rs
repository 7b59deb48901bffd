use std::path::Path;

use shared_types::{DocumentId, UserId};
use time::OffsetDateTime;
use uuid::Uuid;

use super::DocumentService;
use super::dto::{DocumentResponseDTO, SignedDocumentDTO, UploadDocumentRequestDTO};
use super::validator::validate_document;
use crate::model::document::{Document, DocumentState};
use crate::repository::error::DataLayerError;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl DocumentService {
    /// Stores a PDF under a random name in the document directory.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn upload_document(
        &self,
        user_id: UserId,
        request: UploadDocumentRequestDTO,
    ) -> Result<DocumentId, ServiceError> {
        let size = request.content.len() as u64;
        validate_document(
            &request.mime_type,
            size,
            self.config.storage.max_document_size,
        )?;

        let directory = &self.config.storage.document_directory;
        tokio::fs::create_dir_all(directory).await?;

        let id: DocumentId = Uuid::new_v4().into();
        let file_name = format!("{id}.pdf");
        let path = directory.join(&file_name);
        tokio::fs::write(&path, &request.content).await?;

        let document = Document {
            id,
            user_id,
            original_name: request.original_name,
            file_name,
            path: path.to_string_lossy().into_owned(),
            size,
            mime_type: request.mime_type,
            created_date: OffsetDateTime::now_utc(),
            state: DocumentState::Pending,
            signed_date: None,
            signed_by: None,
            signed_path: None,
        };

        if let Err(err) = self.document_repository.create(document).await {
            remove_file(&path).await;
            return Err(err.into());
        }

        tracing::info!(%id, size, "Stored document");
        Ok(id)
    }

    pub async fn get_document(
        &self,
        user_id: &UserId,
        id: &DocumentId,
    ) -> Result<DocumentResponseDTO, ServiceError> {
        Ok(self.get_owned_document(user_id, id).await?.into())
    }

    pub async fn get_document_list(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<DocumentResponseDTO>, ServiceError> {
        let documents = self.document_repository.list_by_user(user_id).await?;
        Ok(documents.into_iter().map(Into::into).collect())
    }

    /// Deletes the record, then the stored files if they are still there.
    pub async fn delete_document(
        &self,
        user_id: &UserId,
        id: &DocumentId,
    ) -> Result<(), ServiceError> {
        let document = self.get_owned_document(user_id, id).await?;

        self.document_repository
            .delete(id, user_id)
            .await
            .map_err(|err| match err {
                DataLayerError::RecordNotUpdated => EntityNotFoundError::Document(*id).into(),
                err => ServiceError::from(err),
            })?;

        remove_file(Path::new(&document.path)).await;
        if let Some(signed_path) = &document.signed_path {
            remove_file(Path::new(signed_path)).await;
        }

        tracing::info!(%id, "Deleted document");
        Ok(())
    }

    pub async fn get_signed_document(
        &self,
        user_id: &UserId,
        id: &DocumentId,
    ) -> Result<SignedDocumentDTO, ServiceError> {
        let document = self.get_owned_document(user_id, id).await?;

        let signed_path = match (document.state, &document.signed_path) {
            (DocumentState::Signed, Some(path)) => path,
            _ => return Err(BusinessLogicError::DocumentNotSigned(*id).into()),
        };

        let content = match tokio::fs::read(signed_path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(EntityNotFoundError::SignedDocumentFile(*id).into());
            }
            Err(err) => return Err(err.into()),
        };

        Ok(SignedDocumentDTO {
            file_name: signed_file_name(id),
            content,
        })
    }

    pub(crate) async fn get_owned_document(
        &self,
        user_id: &UserId,
        id: &DocumentId,
    ) -> Result<Document, ServiceError> {
        self.document_repository
            .get(id)
            .await?
            .filter(|document| document.user_id == *user_id)
            .ok_or_else(|| EntityNotFoundError::Document(*id).into())
    }
}

pub(crate) fn signed_file_name(id: &DocumentId) -> String {
    format!("documento-firmado-{id}.pdf")
}

async fn remove_file(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        if err.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove {}: {err}", path.display());
        }
    }
}
