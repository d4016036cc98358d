//! HTTP header names and defaults.

/// Request header carrying the caller's self-declared identity.
pub const CALLER_HEADER: &str = "user";

/// Identity logged when the caller header is missing.
pub const ANONYMOUS_CALLER: &str = "Anonymous";
