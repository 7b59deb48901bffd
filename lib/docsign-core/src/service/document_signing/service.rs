use secrecy::{ExposeSecret, SecretString};
use shared_types::{DocumentId, UserId};
use time::OffsetDateTime;

use super::DocumentSigningService;
use super::dto::{SignDocumentRequestDTO, SignedDocumentDTO};
use crate::model::document::{DocumentState, UpdateDocumentRequest};
use crate::provider::pdf_signer::PdfSignRequest;
use crate::service::certificate::encryption::decrypt_certificate;
use crate::service::document::service::signed_file_name;
use crate::service::error::{EntityNotFoundError, ServiceError, ValidationError};

const SIGNED_PREFIX: &str = "firmado-";

impl DocumentSigningService {
    /// Signs a stored PDF with one of the user's certificates.
    ///
    /// The signed copy is kept next to the original as `firmado-<file name>`
    /// and the document is marked as signed.
    #[tracing::instrument(level = "debug", skip(self, request), err(Debug))]
    pub async fn sign_document(
        &self,
        user_id: &UserId,
        document_id: &DocumentId,
        request: SignDocumentRequestDTO,
    ) -> Result<SignedDocumentDTO, ServiceError> {
        if request.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingPassword.into());
        }

        let document = self
            .document_repository
            .get(document_id)
            .await?
            .filter(|document| document.user_id == *user_id)
            .ok_or(EntityNotFoundError::Document(*document_id))?;

        let certificate = self
            .certificate_repository
            .get(&request.certificate_id)
            .await?
            .filter(|certificate| certificate.user_id == *user_id)
            .ok_or(EntityNotFoundError::Certificate(request.certificate_id))?;

        if !matches!(tokio::fs::try_exists(&document.path).await, Ok(true)) {
            return Err(EntityNotFoundError::DocumentFile(*document_id).into());
        }

        let workdir = tempfile::Builder::new().prefix("pdf_sign_").tempdir()?;
        let input = workdir.path().join("input.pdf");
        let output = workdir.path().join("output.pdf");
        let certificate_path = workdir.path().join("cert.p12");

        tokio::fs::copy(&document.path, &input).await?;

        let signed_by = certificate.file_name.to_owned();
        let content = decrypt_certificate(certificate, &request.password).await?;
        tokio::fs::write(&certificate_path, content.expose_secret()).await?;

        let ca_certificate = if self.certificate_authority.is_configured().await {
            let path = workdir.path().join("ca.crt");
            tokio::fs::copy(self.certificate_authority.paths().certificate, &path).await?;
            path
        } else {
            tracing::info!("No certificate authority configured, using an ephemeral one");
            self.certificate_authority
                .create_ephemeral_ca(workdir.path())
                .await?
        };

        self.pdf_signer
            .sign(PdfSignRequest {
                certificate: certificate_path,
                password: SecretString::from(request.password.expose_secret()),
                input,
                output: output.to_owned(),
                position: request.position.unwrap_or_default(),
                ca_certificate,
            })
            .await?;

        let signed = tokio::fs::read(&output).await?;

        let directory = &self.config.storage.document_directory;
        tokio::fs::create_dir_all(directory).await?;
        let signed_path = directory.join(format!("{SIGNED_PREFIX}{}", document.file_name));
        tokio::fs::write(&signed_path, &signed).await?;

        self.document_repository
            .update(UpdateDocumentRequest {
                id: *document_id,
                state: Some(DocumentState::Signed),
                signed_date: Some(OffsetDateTime::now_utc()),
                signed_by: Some(signed_by.to_owned()),
                signed_path: Some(signed_path.to_string_lossy().into_owned()),
            })
            .await?;

        tracing::info!(%document_id, "Document signed with {signed_by}");

        Ok(SignedDocumentDTO {
            file_name: signed_file_name(document_id),
            content: signed,
        })
    }
}
