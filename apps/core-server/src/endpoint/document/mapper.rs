use ct_codecs::{Base64, Encoder};
use docsign_core::service::document::dto::UploadDocumentRequestDTO;
use docsign_core::service::document_signing::dto::{
    SignDocumentRequestDTO, SignaturePosition, SignedDocumentDTO,
};
use docsign_core::service::error::ServiceError;
use secrecy::SecretString;

use super::dto::{
    SignDocumentRequestRestDTO, SignaturePositionRestDTO, SignedDocumentResponseRestDTO,
};
use crate::dto::error::ErrorResponseRestDTO;
use crate::extractor::UploadForm;

pub(super) const DOCUMENT_PART: &str = "document";
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

impl From<SignDocumentRequestRestDTO> for SignDocumentRequestDTO {
    fn from(value: SignDocumentRequestRestDTO) -> Self {
        Self {
            certificate_id: value.certificate_id,
            password: SecretString::from(value.password),
            position: value.position.map(Into::into),
        }
    }
}

impl From<SignaturePositionRestDTO> for SignaturePosition {
    fn from(value: SignaturePositionRestDTO) -> Self {
        let default = SignaturePosition::default();
        Self {
            page: value.page.unwrap_or(default.page),
            x1: value.x1.unwrap_or(default.x1),
            y1: value.y1.unwrap_or(default.y1),
            x2: value.x2.unwrap_or(default.x2),
            y2: value.y2.unwrap_or(default.y2),
        }
    }
}

impl TryFrom<SignedDocumentDTO> for SignedDocumentResponseRestDTO {
    type Error = ServiceError;

    fn try_from(value: SignedDocumentDTO) -> Result<Self, Self::Error> {
        Ok(Self {
            file_name: value.file_name,
            pdf_base64: Base64::encode_to_string(&value.content)
                .map_err(|error| ServiceError::MappingError(error.to_string()))?,
        })
    }
}

pub(super) fn upload_request_from_form(
    mut form: UploadForm,
) -> Result<UploadDocumentRequestDTO, ErrorResponseRestDTO> {
    let file = form.take_file(DOCUMENT_PART)?;

    Ok(UploadDocumentRequestDTO {
        original_name: file.file_name.unwrap_or_default(),
        mime_type: file
            .content_type
            .unwrap_or_else(|| FALLBACK_MIME_TYPE.to_string()),
        content: file.content,
    })
}
