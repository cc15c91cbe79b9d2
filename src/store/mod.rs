pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use thiserror::Error;

use crate::users::models::{CreateUserRequest, UpdateUserRequest, User};

pub use memory::MemoryUserStore;
pub use mongo::MongoUserStore;

/// Failure surfaced by a store adapter.
///
/// The service deliberately carries no finer taxonomy; the backend's
/// message is passed along as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),
}

/// Repository port for the user collection.
///
/// Implementations live in the store adapters and must not leak driver
/// types to the handlers. Absence is signaled with `None`/`false` rather
/// than an error, matching the HTTP layer's two-tier outcome mapping.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users, in no guaranteed order.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Fetch a user by id. A malformed identifier is a miss, not an error.
    async fn get(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Persist a new user. The store mints the identifier; client-supplied
    /// ids are never accepted.
    async fn create(&self, input: CreateUserRequest) -> Result<User, StoreError>;

    /// Merge the provided fields into an existing user and return the
    /// updated representation. `None` when nothing matched.
    async fn update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError>;

    /// Remove a user. `false` when nothing matched.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Lightweight connectivity check. Never errors.
    async fn ping(&self) -> bool;
}
