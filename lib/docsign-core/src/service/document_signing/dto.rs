use secrecy::SecretString;
use shared_types::CertificateId;

pub use crate::provider::pdf_signer::SignaturePosition;
pub use crate::service::document::dto::SignedDocumentDTO;

#[derive(Debug)]
pub struct SignDocumentRequestDTO {
    pub certificate_id: CertificateId,
    pub password: SecretString,
    /// defaults to [`SignaturePosition::default`]
    pub position: Option<SignaturePosition>,
}
