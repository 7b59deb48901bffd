use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::extract::multipart::Multipart;
use axum::http::request::Parts;
use shared_types::UserId;

use crate::dto::error::{Cause, ErrorCode, ErrorResponseRestDTO};

pub(crate) const USER_ID_HEADER: &str = "x-user-id";

/// Owner of the request, as forwarded by the authenticating frontend in `X-User-Id`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ErrorResponseRestDTO;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or_else(|| invalid_user_header("Missing X-User-Id header".to_string()))?;

        let user_id = value
            .to_str()
            .map_err(|error| invalid_user_header(error.to_string()))?
            .trim()
            .parse::<UserId>()
            .map_err(|error| invalid_user_header(format!("Invalid X-User-Id header: {error}")))?;

        Ok(Self(user_id))
    }
}

fn invalid_user_header(message: String) -> ErrorResponseRestDTO {
    tracing::warn!("Rejected request: {message}");
    ErrorResponseRestDTO {
        code: ErrorCode::BR_0023,
        message: "General input validation error".to_string(),
        cause: Some(Cause { message }),
    }
}

pub(crate) struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}

/// Multipart form split into file parts and plain text parts, keyed by part name.
#[derive(Default)]
pub(crate) struct UploadForm {
    files: HashMap<String, UploadedFile>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, ErrorResponseRestDTO> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(ToOwned::to_owned) else {
                continue;
            };

            if field.file_name().is_some() {
                let file_name = field.file_name().map(ToOwned::to_owned);
                let content_type = field.content_type().map(ToOwned::to_owned);
                let content = field.bytes().await?.to_vec();
                form.files.insert(
                    name,
                    UploadedFile {
                        file_name,
                        content_type,
                        content,
                    },
                );
            } else {
                form.fields.insert(name, field.text().await?);
            }
        }

        Ok(form)
    }

    pub fn take_file(&mut self, name: &str) -> Result<UploadedFile, ErrorResponseRestDTO> {
        self.files.remove(name).ok_or_else(|| ErrorResponseRestDTO {
            code: ErrorCode::BR_0023,
            message: "General input validation error".to_string(),
            cause: Some(Cause {
                message: format!("Missing file part `{name}`"),
            }),
        })
    }

    pub fn take_field(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }
}
