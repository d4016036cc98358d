use mongodb::bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{FIELD_AGE, FIELD_EMAIL, FIELD_GENDER, FIELD_NAME};

/// Gender values accepted by the user schema
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// User document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

/// Partial update of a user. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.gender.is_none()
    }

    /// Build the body of a `$set` update from the provided fields.
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(ref name) = self.name {
            set.insert(FIELD_NAME, name.clone());
        }
        if let Some(ref email) = self.email {
            set.insert(FIELD_EMAIL, email.clone());
        }
        if let Some(age) = self.age {
            set.insert(FIELD_AGE, age);
        }
        if let Some(gender) = self.gender {
            set.insert(FIELD_GENDER, gender.as_str());
        }
        set
    }

    /// Apply the provided fields to an in-process copy of a user.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(ref name) = self.name {
            user.name = name.clone();
        }
        if let Some(ref email) = self.email {
            user.email = email.clone();
        }
        if let Some(age) = self.age {
            user.age = Some(age);
        }
        if let Some(gender) = self.gender {
            user.gender = Some(gender);
        }
    }
}
