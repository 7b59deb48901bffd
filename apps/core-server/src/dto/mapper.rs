use docsign_core::service::error::ServiceError;

use super::error::{Cause, ErrorResponseRestDTO};

impl From<&ServiceError> for ErrorResponseRestDTO {
    fn from(error: &ServiceError) -> Self {
        let code = error.error_code();
        Self {
            message: code.msg().to_string(),
            code: code.into(),
            cause: Some(Cause::with_message_from_error(error)),
        }
    }
}
