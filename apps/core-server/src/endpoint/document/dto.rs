use docsign_core::model::document::DocumentState;
use docsign_core::service::document::dto::DocumentResponseDTO;
use one_dto_mapper::{From, Into};
use serde::{Deserialize, Serialize};
use shared_types::{CertificateId, DocumentId, UserId};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::serialize::{front_time, front_time_option};

#[derive(Debug, Serialize, ToSchema, From)]
#[serde(rename_all = "camelCase")]
#[from(DocumentResponseDTO)]
pub(crate) struct DocumentResponseRestDTO {
    pub id: DocumentId,
    pub user_id: UserId,
    /// File name as uploaded
    pub original_name: String,
    pub file_name: String,
    /// Bytes
    pub size: u64,
    pub mime_type: String,
    #[schema(value_type = String, example = "2023-06-09T14:19:57.000Z")]
    #[serde(serialize_with = "front_time")]
    pub created_date: OffsetDateTime,
    pub state: DocumentStateRestEnum,
    #[schema(value_type = Option<String>, example = "2023-06-09T14:19:57.000Z")]
    #[serde(serialize_with = "front_time_option")]
    pub signed_date: Option<OffsetDateTime>,
    /// File name of the certificate used for signing
    pub signed_by: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema, From, Into)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[from(DocumentState)]
#[into(DocumentState)]
pub(crate) enum DocumentStateRestEnum {
    Pending,
    Signed,
}

/// Multipart form of a document upload
#[derive(ToSchema)]
#[allow(dead_code)]
pub(crate) struct UploadDocumentRequestRestDTO {
    /// PDF file
    #[schema(value_type = String, format = Binary)]
    pub document: Vec<u8>,
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignDocumentRequestRestDTO {
    pub certificate_id: CertificateId,
    /// Password of the certificate
    pub password: String,
    /// Visible signature box, a box on the first page is used when omitted
    pub position: Option<SignaturePositionRestDTO>,
}

/// Coordinates in PDF points, omitted fields take the default box values
#[derive(Clone, Copy, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignaturePositionRestDTO {
    /// 1-based page number
    #[schema(default = 1)]
    pub page: Option<u32>,
    #[schema(default = 100.0)]
    pub x1: Option<f64>,
    #[schema(default = 275.0)]
    pub y1: Option<f64>,
    #[schema(default = 250.0)]
    pub x2: Option<f64>,
    #[schema(default = 250.0)]
    pub y2: Option<f64>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignedDocumentResponseRestDTO {
    pub file_name: String,
    /// Signed PDF, standard base64
    pub pdf_base64: String,
}
