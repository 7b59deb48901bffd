mod certificate_id;
mod document_id;
mod macros;
mod user_id;

pub use certificate_id::CertificateId;
pub use document_id::DocumentId;
pub use user_id::UserId;
