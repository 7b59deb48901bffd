#![cfg_attr(feature = "strict", deny(warnings))]

use std::any::Any;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, Response};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Router};
use docsign_core::DocsignCore;
use docsign_core::config::core_config::AppConfig;
use sql_data_provider::{DataLayer, DbConn};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span, warn};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::ServerConfig;
use crate::dto::response::ErrorResponse;
use crate::endpoint::{self, certificate, document, misc};
use crate::middleware::get_http_request_context;

// room for the multipart framing around an upload of maximum size
const MULTIPART_OVERHEAD: u64 = 64 * 1024;

pub(crate) struct InternalAppState {
    pub core: DocsignCore,
    pub config: Arc<ServerConfig>,
}

pub(crate) type AppState = Arc<InternalAppState>;

pub async fn start_server(listener: TcpListener, config: AppConfig<ServerConfig>, db_conn: DbConn) {
    listener.set_nonblocking(true).unwrap();

    let body_limit = config
        .core
        .storage
        .max_document_size
        .saturating_add(MULTIPART_OVERHEAD);

    let core = DocsignCore::new(Arc::new(DataLayer::build(db_conn)), config.core)
        .expect("Failed to parse config");

    if let Err(error) = core.certificate_authority_service.initialize().await {
        warn!(%error, "Certificate authority not available, certificate generation disabled");
    }

    let config = Arc::new(config.app);
    let state: AppState = Arc::new(InternalAppState {
        core,
        config: config.to_owned(),
    });

    let addr = listener.local_addr().expect("Invalid TCP listener");
    info!("Starting server at http://{addr}");

    let router = router(
        state,
        config,
        usize::try_from(body_limit).unwrap_or(usize::MAX),
    );

    axum::serve(
        tokio::net::TcpListener::from_std(listener)
            .expect("failed to convert to tokio TcpListener"),
        router.into_make_service(),
    )
    .await
    .expect("Failed to start axum server");
}

fn router(state: AppState, config: Arc<ServerConfig>, body_limit: usize) -> Router {
    let protected = Router::new()
        .route(
            "/api/certificate/v1",
            get(certificate::controller::get_certificate_list)
                .post(certificate::controller::post_certificate)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/api/certificate/v1/generate",
            post(certificate::controller::generate_certificate),
        )
        .route(
            "/api/certificate/v1/{id}",
            get(certificate::controller::get_certificate)
                .delete(certificate::controller::delete_certificate),
        )
        .route(
            "/api/certificate/v1/{id}/validate-password",
            post(certificate::controller::validate_certificate_password),
        )
        .route(
            "/api/document/v1",
            get(document::controller::get_document_list)
                .post(document::controller::post_document)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route(
            "/api/document/v1/{id}",
            get(document::controller::get_document).delete(document::controller::delete_document),
        )
        .route(
            "/api/document/v1/{id}/sign",
            post(document::controller::sign_document),
        )
        .route(
            "/api/document/v1/{id}/signed",
            get(document::controller::get_signed_document),
        )
        .layer(middleware::from_fn(crate::middleware::bearer_check));

    let technical_endpoints = Router::new().route("/health", get(misc::health_check));

    let mut router = Router::new().merge(protected).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let context = get_http_request_context(request);
                info_span!(
                    "http_request",
                    method = context.method,
                    path = context.path,
                    service = "docsign-core",
                    RequestId = context.request_id,
                    SessionId = context.session_id,
                )
            })
            .on_request(|request: &Request<_>, _span: &Span| {
                tracing::debug!(
                    "SERVICE CALL START {} {}",
                    request.method(),
                    request.uri().path()
                )
            })
            .on_failure(|_, _, _: &_| {}) // override default on_failure handler
            .on_response(|response: &Response<_>, _: Duration, _span: &Span| {
                tracing::debug!("SERVICE CALL END {}", response.status())
            }),
    );

    if config.enable_open_api {
        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", gen_openapi_documentation()),
        );
    }

    router
        .merge(technical_endpoints)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(Extension(config))
        .with_state(state)
}

fn gen_openapi_documentation() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            endpoint::certificate::controller::post_certificate,
            endpoint::certificate::controller::get_certificate_list,
            endpoint::certificate::controller::get_certificate,
            endpoint::certificate::controller::delete_certificate,
            endpoint::certificate::controller::generate_certificate,
            endpoint::certificate::controller::validate_certificate_password,

            endpoint::document::controller::post_document,
            endpoint::document::controller::get_document_list,
            endpoint::document::controller::get_document,
            endpoint::document::controller::delete_document,
            endpoint::document::controller::sign_document,
            endpoint::document::controller::get_signed_document,

            endpoint::misc::health_check,
        ),
        components(
            schemas(
                endpoint::certificate::dto::CertificateResponseRestDTO,
                endpoint::certificate::dto::CertificateProfileRestEnum,
                endpoint::certificate::dto::GenerateCertificateRequestRestDTO,
                endpoint::certificate::dto::UploadCertificateRequestRestDTO,
                endpoint::certificate::dto::ValidateCertificatePasswordRequestRestDTO,
                endpoint::certificate::dto::ValidateCertificatePasswordResponseRestDTO,

                endpoint::document::dto::DocumentResponseRestDTO,
                endpoint::document::dto::DocumentStateRestEnum,
                endpoint::document::dto::UploadDocumentRequestRestDTO,
                endpoint::document::dto::SignDocumentRequestRestDTO,
                endpoint::document::dto::SignaturePositionRestDTO,
                endpoint::document::dto::SignedDocumentResponseRestDTO,

                crate::dto::common::EntityResponseRestDTO,

                crate::dto::error::ErrorResponseRestDTO,
                crate::dto::error::ErrorCode,
                crate::dto::error::Cause,

                shared_types::CertificateId,
                shared_types::DocumentId,
                shared_types::UserId,
            )
        ),
        tags(
            (name = "other", description = "Other utility endpoints"),
            (name = "certificate_management", description = "Certificate management"),
            (name = "document_management", description = "Document management and signing"),
        ),
        modifiers(&SecurityAddon)
    )]
    struct ApiDoc;

    struct SecurityAddon;

    impl Modify for SecurityAddon {
        fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
            let components = openapi.components.as_mut().expect("OpenAPI Components");
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("BFF access token"))
                        .build(),
                ),
            );
        }
    }

    let mut docs = ApiDoc::openapi();
    docs.info.version = env!("CARGO_PKG_VERSION").to_string();

    docs
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic message".to_string()
    };

    tracing::error!("PANIC occurred in request: {message}");

    ErrorResponse::for_panic(message).into_response()
}
