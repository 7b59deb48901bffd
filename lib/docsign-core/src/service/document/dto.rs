use one_dto_mapper::From;
use shared_types::{DocumentId, UserId};
use time::OffsetDateTime;

use crate::model::document::{Document, DocumentState};

#[derive(Clone, Debug)]
pub struct UploadDocumentRequestDTO {
    pub original_name: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
#[from(Document)]
pub struct DocumentResponseDTO {
    pub id: DocumentId,
    pub user_id: UserId,
    pub original_name: String,
    pub file_name: String,
    pub size: u64,
    pub mime_type: String,
    pub created_date: OffsetDateTime,
    pub state: DocumentState,
    pub signed_date: Option<OffsetDateTime>,
    pub signed_by: Option<String>,
}

#[derive(Clone, Debug)]
pub struct SignedDocumentDTO {
    pub file_name: String,
    pub content: Vec<u8>,
}
