use serde::{Deserialize, Serialize};
use shared_types::{DocumentId, UserId};
use strum::{Display, EnumString};
use time::OffsetDateTime;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub user_id: UserId,
    pub original_name: String,
    /// name under the storage directory
    pub file_name: String,
    pub path: String,
    pub size: u64,
    pub mime_type: String,
    pub created_date: OffsetDateTime,
    pub state: DocumentState,
    pub signed_date: Option<OffsetDateTime>,
    pub signed_by: Option<String>,
    pub signed_path: Option<String>,
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentState {
    Pending,
    Signed,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpdateDocumentRequest {
    pub id: DocumentId,
    pub state: Option<DocumentState>,
    pub signed_date: Option<OffsetDateTime>,
    pub signed_by: Option<String>,
    pub signed_path: Option<String>,
}
