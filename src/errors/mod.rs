use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use mongodb::error::{ErrorKind, WriteFailure};
use std::fmt;

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_INTERNAL_ERROR, CODE_INVALID_USER_ID, CODE_STORE_UNAVAILABLE,
    CODE_USER_NOT_FOUND, CODE_VALIDATION_FAILED, DUPLICATE_KEY_CODE, ERR_EMAIL_EXISTS,
    ERR_INVALID_USER_ID, ERR_STORE_UNAVAILABLE, ERR_USER_NOT_FOUND, ERR_VALIDATION_FAILED,
};
use crate::models::ErrorResponse;

/// Every failure the service can report, tagged by kind.
///
/// Values are created once, where the failure happens, and travel unchanged
/// through repository, service and handler. Only the HTTP boundary logs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Conflict { code: String, message: String },
    ServiceUnavailable { code: String, message: String },
    InternalServerError { code: String, message: String },
    ValidationError { code: String, errors: Vec<String> },
}

impl ApiError {
    pub fn user_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_USER_NOT_FOUND.to_string(),
            message: ERR_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn invalid_user_id() -> Self {
        ApiError::BadRequest {
            code: CODE_INVALID_USER_ID.to_string(),
            message: ERR_INVALID_USER_ID.to_string(),
        }
    }

    pub fn email_exists() -> Self {
        ApiError::Conflict {
            code: CODE_EMAIL_EXISTS.to_string(),
            message: ERR_EMAIL_EXISTS.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: message.into(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        ApiError::ValidationError {
            code: CODE_VALIDATION_FAILED.to_string(),
            errors,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest { code, message } => {
                write!(f, "Bad Request [{}]: {}", code, message)
            }
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::Conflict { code, message } => {
                write!(f, "Conflict [{}]: {}", code, message)
            }
            ApiError::ServiceUnavailable { code, message } => {
                write!(f, "Service Unavailable [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
            ApiError::ValidationError { code, errors } => {
                write!(f, "Validation Error [{}]: {:?}", code, errors)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let body = match self {
            ApiError::ValidationError { code, errors } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: ERR_VALIDATION_FAILED.to_string(),
                errors: Some(errors.clone()),
            },
            ApiError::BadRequest { code, message }
            | ApiError::NotFound { code, message }
            | ApiError::Conflict { code, message }
            | ApiError::ServiceUnavailable { code, message }
            | ApiError::InternalServerError { code, message } => ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
                errors: None,
            },
        };

        HttpResponse::build(status).json(body)
    }
}

/// True when the driver rejected a write because of a unique index.
fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// True when the store could not be reached at all.
fn is_unavailable(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            ApiError::email_exists()
        } else if is_unavailable(&err) {
            ApiError::ServiceUnavailable {
                code: CODE_STORE_UNAVAILABLE.to_string(),
                message: format!("{}: {}", ERR_STORE_UNAVAILABLE, err),
            }
        } else {
            ApiError::internal(err.to_string())
        }
    }
}
