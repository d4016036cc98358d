//! Data models organized by type.

pub mod query;
pub mod requests;
pub mod responses;
pub mod user;

pub use query::*;
pub use requests::*;
pub use responses::*;
pub use user::*;
