//! Query defaults for user listings.

/// The only `sort` value that selects ascending order; anything else is descending.
pub const SORT_ASC: &str = "asc";

/// Sort applied by `GET /v1/users` when the caller omits `sort`.
pub const DEFAULT_LIST_SORT: &str = "desc";
