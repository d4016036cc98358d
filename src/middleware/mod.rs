//! HTTP middleware.

pub mod request_ext;
pub mod request_logger;

pub use request_ext::RequestExt;
pub use request_logger::{CallerIdentity, RequestLogger};
