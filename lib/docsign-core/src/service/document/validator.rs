use crate::service::error::ValidationError;

pub(crate) const PDF_MIME_TYPE: &str = "application/pdf";

pub(super) fn validate_document(
    mime_type: &str,
    size: u64,
    max_size: u64,
) -> Result<(), ValidationError> {
    if mime_type != PDF_MIME_TYPE {
        return Err(ValidationError::UnsupportedDocumentType(
            mime_type.to_owned(),
        ));
    }

    if size > max_size {
        return Err(ValidationError::DocumentTooLarge {
            size,
            max: max_size,
        });
    }

    Ok(())
}
