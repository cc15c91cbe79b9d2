//! In-process user store.
//!
//! Backs the integration tests and local runs without a database. Uses
//! the same ObjectId hex identifiers the Mongo adapter produces so route
//! behavior is indistinguishable.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::users::models::{CreateUserRequest, UpdateUserRequest, User};

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
    offline: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate losing the backing store. While unhealthy every operation
    /// fails and `ping` reports down.
    pub fn set_healthy(&self, healthy: bool) {
        self.offline.store(!healthy, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreError::Backend("user store is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        self.check_online()?;
        Ok(self.users.read().await.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, StoreError> {
        self.check_online()?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn create(&self, input: CreateUserRequest) -> Result<User, StoreError> {
        self.check_online()?;
        let user = User {
            id: ObjectId::new().to_hex(),
            name: input.name,
            email: input.email,
            age: input.age,
        };
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError> {
        self.check_online()?;
        let mut users = self.users.write().await;
        let Some(user) = users.get_mut(id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(age) = changes.age {
            user.age = age;
        }
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.check_online()?;
        Ok(self.users.write().await.remove(id).is_some())
    }

    async fn ping(&self) -> bool {
        !self.offline.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> CreateUserRequest {
        CreateUserRequest {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            age: 45,
        }
    }

    #[tokio::test]
    async fn update_merges_only_the_provided_fields() {
        let store = MemoryUserStore::new();
        let created = store.create(sample_input()).await.unwrap();

        let updated = store
            .update(
                &created.id,
                UpdateUserRequest {
                    age: Some(46),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("user exists");

        assert_eq!(updated.name, "Grace Hopper");
        assert_eq!(updated.email, "grace@example.com");
        assert_eq!(updated.age, 46);
    }

    #[tokio::test]
    async fn minted_identifiers_are_unique() {
        let store = MemoryUserStore::new();
        let a = store.create(sample_input()).await.unwrap();
        let b = store.create(sample_input()).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn offline_store_fails_operations_and_reports_unhealthy() {
        let store = MemoryUserStore::new();
        store.set_healthy(false);

        assert!(!store.ping().await);
        assert!(store.list().await.is_err());
        assert!(store.create(sample_input()).await.is_err());

        store.set_healthy(true);
        assert!(store.ping().await);
        assert!(store.list().await.is_ok());
    }
}
