//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Gender, User};

/// User data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    /// User's display name
    #[schema(example = "Ann")]
    pub name: String,
    /// User's email address
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// User's age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// User's gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: user.name,
            email: user.email,
            age: user.age,
            gender: user.gender,
        }
    }
}

/// Body of `GET /v1/users/{id}`: one user for an ID, a list for a count
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum UserLookupResponse {
    User(UserResponse),
    Users(Vec<UserResponse>),
}
