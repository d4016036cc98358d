//! MongoDB collection and field names.

pub const COLLECTION_USERS: &str = "users";

pub const FIELD_ID: &str = "_id";
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_AGE: &str = "age";
pub const FIELD_GENDER: &str = "gender";

/// Server error code MongoDB reports for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;
