//! Application constants module.
//!
//! This module centralizes the constant strings used throughout the service,
//! including error messages, error codes, collection names and query defaults.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod headers;
pub mod messages;
pub mod sorting;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use headers::*;
pub use messages::*;
pub use sorting::*;
