//! User repository for all MongoDB operations related to users.
//!
//! This repository encapsulates all database access logic for the User collection.
//! Driver errors are converted into `ApiError` exactly once, here.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Collection, Database, IndexModel};

use crate::constants::{
    COLLECTION_USERS, ERR_MISSING_INSERTED_ID, FIELD_EMAIL, FIELD_ID, FIELD_NAME,
};
use crate::errors::ApiError;
use crate::models::{SortDirection, User, UserPatch};
use crate::repositories::UserStore;

/// MongoDB-backed user repository.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    /// Create the unique index on `email` that backs the duplicate-key check.
    async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let email_index = IndexModel::builder()
            .keys(doc! { FIELD_EMAIL: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(email_index).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    async fn list(&self, sort: SortDirection) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Listing users sorted by name {:?}", sort);
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { FIELD_NAME: sort.as_mongo_order() })
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by ID: {}", id);
        Ok(self.collection.find_one(doc! { FIELD_ID: id }).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email");
        Ok(self.collection.find_one(doc! { FIELD_EMAIL: email }).await?)
    }

    async fn insert(&self, user: User) -> Result<User, ApiError> {
        let result = self.collection.insert_one(&user).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| ApiError::internal(ERR_MISSING_INSERTED_ID))?;
        debug!("Repository: Inserted user {}", id);

        Ok(User {
            id: Some(id),
            ..user
        })
    }

    async fn update(&self, id: ObjectId, patch: &UserPatch) -> Result<Option<User>, ApiError> {
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        debug!("Repository: Updating user {}", id);
        Ok(self
            .collection
            .find_one_and_update(
                doc! { FIELD_ID: id },
                doc! { "$set": patch.to_set_document() },
            )
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete(&self, id: ObjectId) -> Result<Option<User>, ApiError> {
        debug!("Repository: Deleting user {}", id);
        Ok(self.collection.find_one_and_delete(doc! { FIELD_ID: id }).await?)
    }

    async fn limit(&self, n: u64) -> Result<Vec<User>, ApiError> {
        // MongoDB reads a limit of zero as "no limit".
        if n == 0 {
            return Ok(Vec::new());
        }

        debug!("Repository: Fetching up to {} users", n);
        let limit = i64::try_from(n).unwrap_or(i64::MAX);
        let cursor = self.collection.find(doc! {}).limit(limit).await?;

        Ok(cursor.try_collect().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::Client;

    fn user(name: &str, email: &str) -> User {
        User {
            id: None,
            name: name.to_string(),
            email: email.to_string(),
            age: None,
            gender: None,
        }
    }

    /// Fresh repository in a throwaway database, or `None` when `MONGODB_URI` is unset.
    async fn scratch_repository() -> Option<(Database, MongoUserRepository)> {
        let uri = std::env::var("MONGODB_URI").ok()?;
        let client = Client::with_uri_str(&uri).await.unwrap();
        let db = client.database(&format!("user_service_test_{}", ObjectId::new().to_hex()));
        let repository = MongoUserRepository::new(&db);
        repository.create_indexes().await.unwrap();
        Some((db, repository))
    }

    #[actix_web::test]
    async fn test_unreachable_server_is_unavailable() {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200")
            .await
            .unwrap();
        let repository = MongoUserRepository::new(&client.database("unreachable"));

        let err = repository.find_by_email("ann@x.com").await.unwrap_err();
        assert!(
            matches!(err, ApiError::ServiceUnavailable { .. }),
            "unexpected error: {:?}",
            err
        );
    }

    #[actix_web::test]
    #[ignore = "requires MONGODB_URI"]
    async fn test_duplicate_insert_is_conflict() {
        let Some((db, repository)) = scratch_repository().await else {
            return;
        };
        repository.insert(user("Ann", "ann@x.com")).await.unwrap();

        let err = repository.insert(user("Other Ann", "ann@x.com")).await.unwrap_err();
        assert_eq!(err, ApiError::email_exists());
        assert_eq!(repository.limit(10).await.unwrap().len(), 1);

        db.drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore = "requires MONGODB_URI"]
    async fn test_update_to_taken_email_is_conflict() {
        let Some((db, repository)) = scratch_repository().await else {
            return;
        };
        repository.insert(user("Ann", "ann@x.com")).await.unwrap();
        let bob = repository.insert(user("Bob", "bob@x.com")).await.unwrap();

        let patch = UserPatch {
            email: Some("ann@x.com".to_string()),
            ..Default::default()
        };
        let err = repository.update(bob.id.unwrap(), &patch).await.unwrap_err();
        assert_eq!(err, ApiError::email_exists());

        db.drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore = "requires MONGODB_URI"]
    async fn test_update_sets_only_given_fields() {
        let Some((db, repository)) = scratch_repository().await else {
            return;
        };
        let ann = repository
            .insert(User {
                age: Some(30),
                ..user("Ann", "ann@x.com")
            })
            .await
            .unwrap();

        let patch = UserPatch {
            name: Some("Ann B".to_string()),
            ..Default::default()
        };
        let updated = repository
            .update(ann.id.unwrap(), &patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Ann B");
        assert_eq!(updated.email, "ann@x.com");
        assert_eq!(updated.age, Some(30));

        assert_eq!(repository.update(ObjectId::new(), &patch).await.unwrap(), None);

        db.drop().await.unwrap();
    }

    #[actix_web::test]
    #[ignore = "requires MONGODB_URI"]
    async fn test_list_order_and_limit() {
        let Some((db, repository)) = scratch_repository().await else {
            return;
        };
        for (name, email) in [("Cy", "c@x.com"), ("Al", "a@x.com"), ("Bo", "b@x.com")] {
            repository.insert(user(name, email)).await.unwrap();
        }

        let names = |users: Vec<User>| users.into_iter().map(|u| u.name).collect::<Vec<_>>();
        assert_eq!(
            names(repository.list(SortDirection::Asc).await.unwrap()),
            vec!["Al", "Bo", "Cy"]
        );
        assert_eq!(
            names(repository.list(SortDirection::Desc).await.unwrap()),
            vec!["Cy", "Bo", "Al"]
        );
        assert!(repository.limit(0).await.unwrap().is_empty());
        assert_eq!(repository.limit(2).await.unwrap().len(), 2);
        assert_eq!(repository.limit(5).await.unwrap().len(), 3);

        db.drop().await.unwrap();
    }
}
