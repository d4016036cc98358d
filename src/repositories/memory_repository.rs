//! Process-local user store.
//!
//! Keeps users in insertion order and enforces the same unique-email rule as the
//! MongoDB index. Data lives only as long as the process.

use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::models::{SortDirection, User, UserPatch};
use crate::repositories::UserStore;

/// In-memory user repository.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Stored users always carry an id, so `except: None` matches every record.
fn email_taken(users: &[User], email: &str, except: Option<ObjectId>) -> bool {
    users.iter().any(|u| u.email == email && u.id != except)
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn create_indexes(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn list(&self, sort: SortDirection) -> Result<Vec<User>, ApiError> {
        let mut users = self.users.read().await.clone();
        match sort {
            SortDirection::Asc => users.sort_by(|a, b| a.name.cmp(&b.name)),
            SortDirection::Desc => users.sort_by(|a, b| b.name.cmp(&a.name)),
        }
        Ok(users)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, ApiError> {
        let mut users = self.users.write().await;
        if email_taken(&users, &user.email, None) {
            return Err(ApiError::email_exists());
        }

        let stored = User {
            id: Some(ObjectId::new()),
            ..user
        };
        debug!("Memory store: inserted user {:?}", stored.id);
        users.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: ObjectId, patch: &UserPatch) -> Result<Option<User>, ApiError> {
        let mut users = self.users.write().await;
        let Some(index) = users.iter().position(|u| u.id == Some(id)) else {
            return Ok(None);
        };

        if let Some(ref email) = patch.email {
            if email_taken(&users, email, Some(id)) {
                return Err(ApiError::email_exists());
            }
        }

        let user = &mut users[index];
        patch.apply_to(user);
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        let mut users = self.users.write().await;
        let position = users.iter().position(|u| u.id == Some(id));
        Ok(position.map(|index| users.remove(index)))
    }

    async fn limit(&self, n: u64) -> Result<Vec<User>, ApiError> {
        let users = self.users.read().await;
        let n = usize::try_from(n).unwrap_or(usize::MAX);
        Ok(users.iter().take(n).cloned().collect())
    }
}
