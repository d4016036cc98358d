//! User service: the seam between HTTP handlers and the user store.
//!
//! Every method forwards to the repository with the same arguments and returns its
//! result untouched. The only work done here is turning textual ids into `ObjectId`s.

use log::debug;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::models::{CreateUserRequest, SortDirection, UpdateUserRequest, User};
use crate::repositories::UserStore;

pub struct UserService {
    repository: Arc<dyn UserStore>,
}

fn parse_user_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::invalid_user_id())
}

impl UserService {
    pub fn new(repository: Arc<dyn UserStore>) -> Self {
        Self { repository }
    }

    /// Prepare the underlying store. Called once during startup.
    pub async fn init_store(&self) -> Result<(), ApiError> {
        self.repository.create_indexes().await
    }

    pub async fn get_all_users(&self, sort: SortDirection) -> Result<Vec<User>, ApiError> {
        debug!("Fetching all users sorted {:?}", sort);
        self.repository.list(sort).await
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by ID: {}", id);
        let object_id = parse_user_id(id)?;
        self.repository.find_by_id(object_id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        self.repository.find_by_email(email).await
    }

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        self.repository.insert(req.into()).await
    }

    /// Apply the provided fields; `Ok(None)` when the user does not exist.
    pub async fn update_user(
        &self,
        id: &str,
        req: UpdateUserRequest,
    ) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        self.repository.update(object_id, &req.into()).await
    }

    /// Remove the user; returns the deleted record, or `Ok(None)` when it did not exist.
    pub async fn delete_user(&self, id: &str) -> Result<Option<User>, ApiError> {
        let object_id = parse_user_id(id)?;
        self.repository.delete(object_id).await
    }

    pub async fn get_users_limited(&self, n: u64) -> Result<Vec<User>, ApiError> {
        debug!("Fetching up to {} users", n);
        self.repository.limit(n).await
    }
}
