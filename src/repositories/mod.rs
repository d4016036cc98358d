//! Repository layer for database operations.
//!
//! `UserStore` is the persistence boundary: services only ever see the trait,
//! and the composition root decides which backend sits behind it.

pub mod memory_repository;
pub mod user_repository;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::errors::ApiError;
use crate::models::{SortDirection, User, UserPatch};

pub use memory_repository::InMemoryUserRepository;
pub use user_repository::MongoUserRepository;

/// Persistence operations for users.
///
/// Lookups that find nothing return `Ok(None)`; `Err` is reserved for store failures
/// and constraint violations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Prepare the backing store (indexes, etc.). Called once at startup.
    async fn create_indexes(&self) -> Result<(), ApiError>;

    /// All users ordered by name.
    async fn list(&self, sort: SortDirection) -> Result<Vec<User>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new user and return it with its store-assigned id.
    ///
    /// Fails with `ApiError::Conflict` when the email is already taken.
    async fn insert(&self, user: User) -> Result<User, ApiError>;

    /// Apply a partial update and return the post-update record.
    async fn update(&self, id: ObjectId, patch: &UserPatch) -> Result<Option<User>, ApiError>;

    /// Remove a user and return the record as it was before deletion.
    async fn delete(&self, id: ObjectId) -> Result<Option<User>, ApiError>;

    /// Up to `n` users in storage order.
    async fn limit(&self, n: u64) -> Result<Vec<User>, ApiError>;
}
