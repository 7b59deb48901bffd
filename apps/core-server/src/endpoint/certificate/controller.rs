use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum_extra::extract::WithRejection;
use docsign_core::service::certificate::dto::GeneratedCertificateDTO;
use secrecy::SecretString;
use shared_types::{CertificateId, UserId};

use super::dto::{
    CertificateResponseRestDTO, GenerateCertificateRequestRestDTO,
    UploadCertificateRequestRestDTO, ValidateCertificatePasswordRequestRestDTO,
    ValidateCertificatePasswordResponseRestDTO,
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

const PKCS12_CONTENT_TYPE: &str = "application/x-pkcs12";

#[utoipa::path(
    post,
    path = "/api/certificate/v1",
    request_body(content = UploadCertificateRequestRestDTO, content_type = "multipart/form-data"),
    responses(CreatedOrErrorResponse<EntityResponseRestDTO>),
    params(
        ("X-User-Id" = UserId, Header, description = "Owner of the certificate")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "Upload a certificate",
    description = indoc::formatdoc! {"
    Stores a PKCS#12 certificate for the user.

    The password is verified against the file before anything is stored.
    The certificate is then encrypted with a key derived from that password,
    except for certificates issued by the system CA which are kept as is.
"},
)]
pub(crate) async fn post_certificate(
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
        .certificate_service
        .upload_certificate(user_id, request)
        .await;

    CreatedOrErrorResponse::from_result(result, state, "uploading certificate")
}

#[utoipa::path(
    get,
    path = "/api/certificate/v1",
    responses(OkOrErrorResponse<VecResponse<CertificateResponseRestDTO>>),
    params(
        ("X-User-Id" = UserId, Header, description = "Owner of the certificates")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "List certificates",
    description = "Returns the certificates of the user, newest first.",
)]
pub(crate) async fn get_certificate_list(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> OkOrErrorResponse<VecResponse<CertificateResponseRestDTO>> {
    let result = state
        .core
        .certificate_service
        .get_certificate_list(&user_id)
        .await;

    OkOrErrorResponse::from_result(result, state, "listing certificates")
}

#[utoipa::path(
    get,
    path = "/api/certificate/v1/{id}",
    responses(OkOrErrorResponse<CertificateResponseRestDTO>),
    params(
        ("id" = CertificateId, Path, description = "Certificate id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the certificate")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "Retrieve certificate",
    description = "Returns the metadata of a certificate. The content is never returned.",
)]
pub(crate) async fn get_certificate(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<CertificateId>, ErrorResponseRestDTO>,
) -> OkOrErrorResponse<CertificateResponseRestDTO> {
    let result = state
        .core
        .certificate_service
        .get_certificate(&user_id, &id)
        .await;

    OkOrErrorResponse::from_result(result, state, "getting certificate")
}

#[utoipa::path(
    delete,
    path = "/api/certificate/v1/{id}",
    responses(EmptyOrErrorResponse),
    params(
        ("id" = CertificateId, Path, description = "Certificate id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the certificate")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "Delete certificate",
)]
pub(crate) async fn delete_certificate(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<CertificateId>, ErrorResponseRestDTO>,
) -> EmptyOrErrorResponse {
    let result = state
        .core
        .certificate_service
        .delete_certificate(&user_id, &id)
        .await;

    EmptyOrErrorResponse::from_result(result, state, "deleting certificate")
}

#[utoipa::path(
    post,
    path = "/api/certificate/v1/generate",
    request_body = GenerateCertificateRequestRestDTO,
    responses(FileOrErrorResponse),
    params(
        ("X-User-Id" = UserId, Header, description = "Owner of the certificate")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "Generate a certificate",
    description = indoc::formatdoc! {"
    Issues a new certificate signed by the system CA.

    The response body is the PKCS#12 file, protected by the requested password.
    Nothing is stored: uploading the file afterwards registers it as a system certificate.
"},
)]
pub(crate) async fn generate_certificate(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Json(request), _): WithRejection<
        Json<GenerateCertificateRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> FileOrErrorResponse {
    let result = state
        .core
        .certificate_service
        .generate_certificate(&user_id, request.into())
        .await
        .map(|GeneratedCertificateDTO { file_name, content }| FileResponse {
            content_type: PKCS12_CONTENT_TYPE,
            file_name,
            content,
        });

    FileOrErrorResponse::from_result(result, state, "generating certificate")
}

#[utoipa::path(
    post,
    path = "/api/certificate/v1/{id}/validate-password",
    request_body = ValidateCertificatePasswordRequestRestDTO,
    responses(OkOrErrorResponse<ValidateCertificatePasswordResponseRestDTO>),
    params(
        ("id" = CertificateId, Path, description = "Certificate id"),
        ("X-User-Id" = UserId, Header, description = "Owner of the certificate")
    ),
    tag = "certificate_management",
    security(
        ("bearer" = [])
    ),
    summary = "Check certificate password",
    description = "Succeeds when the password opens the stored certificate.",
)]
pub(crate) async fn validate_certificate_password(
    state: State<AppState>,
    CurrentUser(user_id): CurrentUser,
    WithRejection(Path(id), _): WithRejection<Path<CertificateId>, ErrorResponseRestDTO>,
    WithRejection(Json(request), _): WithRejection<
        Json<ValidateCertificatePasswordRequestRestDTO>,
        ErrorResponseRestDTO,
    >,
) -> OkOrErrorResponse<ValidateCertificatePasswordResponseRestDTO> {
    let password = SecretString::from(request.password);
    let result = state
        .core
        .certificate_service
        .validate_certificate_password(&user_id, &id, &password)
        .await
        .map(|_| ValidateCertificatePasswordResponseRestDTO { valid: true });

    OkOrErrorResponse::from_result(result, state, "validating certificate password")
}
