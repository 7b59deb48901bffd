use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum_extra::extract::WithRejection;
use docsign_core::service::document::dto::SignedDocumentDTO;
use shared_types::{DocumentId, UserId};

use super::dto::{
    DocumentResponseRestDTO, SignDocumentRequestRestDTO, SignedDocumentResponseRestDTO,
    UploadDocumentRequestRestDTO,
};
use super::mapper::upload_request_from_form;
use crate::dto::common::EntityResponseRestDTO;
use crate::dto::error::ErrorResponseRestDTO;
use crate::dto::response::{
    CreatedOrErrorResponse, EmptyOrErrorResponse, ErrorResponse, FileOrErrorResponse,
    FileResponse, OkOrErrorResponse, VecResponse,
};
use crate::extractor::{CurrentUser, UploadForm};
use crate::router::AppState;

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[utoipa::path(
    post,
    path = "/api/document/v1",
    request_body(content = UploadDocumentRequestRestDTO, content_type = "multipart/form-data"),
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    params(
        ("X-User-Id" = UserId, Header, description = "Owner of the document")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "Upload a document",
    description = "Stores a PDF document for later signing.",
)]
pub(crate) async fn post_document(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(multipart, _): WithRejection<Multipart, ErrorResponseRestDTO>,
) -> CreatedOrErrorResponse<EntityResponseRestDTO> {
    let request = match UploadForm::read(multipart)
        .await
        .and_then(upload_request_from_form)
    {
        Ok(request) => request,
        Err(error) => return CreatedOrErrorResponse::Error(ErrorResponse::BadRequest(error)),
    };

    let result = state
        .core
        .document_service
        .upload_document(user_id, request)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "uploading document")
}

#[utoipa::path(
    get,
    path = "/api/document/v1",
    responses(OkOrErrorResponse<VecResponse<DocumentResponseRestDTO>>),
    params(
        ("X-User-Id" = UserId, Header, description = "Owner of the documents")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "List documents",
)]
pub(crate) async fn get_document_list(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> OkOrErrorResponse<VecResponse<DocumentResponseRestDTO>> {
    let result = state.core.document_service.get_document_list(&user_id).await;

    OkOrErrorResponse::from_result(result, state, "listing documents")
}

#[utoipa::path(
    get,
    path = "/api/document/v1/{id}",
    responses(OkOrErrorResponse<DocumentResponseRestDTO>),
    params(
        ("id" = DocumentId, Path, description = "Document id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the document")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve document",
)]
pub(crate) async fn get_document(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<DocumentId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<DocumentResponseRestDTO> {
    let result = state
        .core
        .document_service
        .get_document(&user_id, &id)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting document")
}

#[utoipa::path(
    delete,
    path = "/api/document/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = DocumentId, Path, description = "Document id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the document")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete document",
    description = "Deletes the document together with its signed copy.",
)]
pub(crate) async fn delete_document(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<DocumentId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .document_service
        .delete_document(&user_id, &id)
        .await;

    EmptyOrErrorResponse::from_result(result, state, "deleting document")
}

#[utoipa::path(
    post,
    path = "/api/document/v1/{id}/sign",
    request_body = SignDocumentRequestRestDTO,
    responses(OkOrErrorResponse<SignedDocumentResponseRestDTO>),
    params(
        ("id" = DocumentId, Path, description = "Document id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the document and the certificate")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "Sign document",
    description = indoc::formatdoc! {"
    Signs the document with one of the user's certificates and returns the signed PDF.

    The signed copy is also kept and can be downloaded again from
    `/api/document/v1/{{id}}/signed`.
"},
)]
pub(crate) async fn sign_document(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<DocumentId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<SignDocumentRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<SignedDocumentResponseRestDTO> {
    let result = state
        .core
        .document_signing_service
        .sign_document(&user_id, &id, request.into())
        .await
        .and_then(SignedDocumentResponseRestDTO::try_from);

    OkOrErrorResponse::from_result(result, state, "signing document")
}

#[utoipa::path(
    get,
    path = "/api/document/v1/{id}/signed",
    responses(FileOrErrorResponse),
    params(
        ("id" = DocumentId, Path, description = "Document id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the document")
    ),
    tag = "document_management",
    security(
        ("bearer" = [])
    ),
    summary = "Download signed document",
)]
pub(crate) async fn get_signed_document(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<DocumentId>, ErrorResponseRestDTO>,
) -> FileOrErrorResponse {
    let result = state
        .core
        .document_service
        .get_signed_document(&user_id, &id)
        .await
        .map(|SignedDocumentDTO { file_name, content }| FileResponse {
            content_type: PDF_CONTENT_TYPE,
            file_name,
            content,
        });

    FileOrErrorResponse::from_result(result, state, "downloading signed document")
}
