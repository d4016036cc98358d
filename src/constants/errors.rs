//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID format";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_NAME_REQUIRED: &str = "Name is required";
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";

// Storage errors
pub const ERR_STORE_UNAVAILABLE: &str = "User store is unavailable";
pub const ERR_MISSING_INSERTED_ID: &str = "Store did not return an ObjectId for the new user";
