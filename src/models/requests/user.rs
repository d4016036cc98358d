//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Gender, User, UserPatch};
use crate::validators::{validate_email_present, validate_name};

/// Request payload for creating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Ann")]
    pub name: String,
    /// Email address, unique across all users
    #[validate(custom(function = "validate_email_present"))]
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(example = 30)]
    pub age: Option<i32>,
    /// One of `Male`, `Female`, `Other`
    pub gender: Option<Gender>,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            email: req.email,
            age: req.age,
            gender: req.gender,
        }
    }
}

/// Request payload for a partial user update
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Ann Smith")]
    pub name: Option<String>,
    /// New email address
    #[validate(custom(function = "validate_email_present"))]
    #[schema(example = "ann.smith@x.com")]
    pub email: Option<String>,
    /// New age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    #[schema(example = 31)]
    pub age: Option<i32>,
    /// New gender
    pub gender: Option<Gender>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            age: req.age,
            gender: req.gender,
        }
    }
}
