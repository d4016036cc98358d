//! Listing order for user queries.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::constants::{DEFAULT_LIST_SORT, SORT_ASC};

/// Direction of the `name` ordering applied to user listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Only the exact value `"asc"` is ascending; every other value sorts descending.
    pub fn from_query(value: &str) -> Self {
        if value == SORT_ASC {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }

    /// MongoDB sort specifier for this direction.
    pub fn as_mongo_order(&self) -> i32 {
        match self {
            SortDirection::Asc => 1,
            SortDirection::Desc => -1,
        }
    }
}

/// Query parameters for `GET /v1/users`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// `asc` for ascending name order; anything else (default `desc`) is descending
    pub sort: Option<String>,
}

impl ListUsersQuery {
    pub fn direction(&self) -> SortDirection {
        SortDirection::from_query(self.sort.as_deref().unwrap_or(DEFAULT_LIST_SORT))
    }
}
