//! Common validation utilities and extractor error handlers.
//!
//! Every way a request can be malformed (bad JSON body, unparseable path
//! segment, bad query string, failed field validation) ends up as an
//! `ApiError::ValidationError`, answered with 422.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest};
use log::debug;
use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// Messages are sorted so responses are stable regardless of field order.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let mut errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match e.message {
                Some(ref message) => message.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    errors.sort();
    ApiError::validation(errors)
}

/// Error handler for `web::Json` extraction failures.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected JSON body for {}: {}", req.path(), err);
    ApiError::validation(vec![err.to_string()]).into()
}

/// Error handler for `web::Path` extraction failures.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    debug!("Rejected path parameters for {}: {}", req.path(), err);
    ApiError::validation(vec![err.to_string()]).into()
}

/// Error handler for `web::Query` extraction failures.
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected query string for {}: {}", req.path(), err);
    ApiError::validation(vec![err.to_string()]).into()
}
