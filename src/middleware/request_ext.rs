//! Request extension trait for reading the caller identity from HTTP requests.

use actix_web::HttpMessage;

use crate::constants::ANONYMOUS_CALLER;
use crate::middleware::CallerIdentity;

/// Extension trait for reading what the RequestLogger recorded about the caller.
pub trait RequestExt {
    /// The caller named by the `user` header, or `Anonymous`.
    fn get_caller(&self) -> String;
}

impl RequestExt for actix_web::HttpRequest {
    fn get_caller(&self) -> String {
        self.extensions()
            .get::<CallerIdentity>()
            .map(|caller| caller.0.clone())
            .unwrap_or_else(|| ANONYMOUS_CALLER.to_string())
    }
}
