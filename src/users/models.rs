use serde::{Deserialize, Serialize};

/// A stored user.
///
/// `id` is the hex form of the store's native identifier, minted at
/// creation and immutable. Clients never supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Creation shape: every profile field required, no identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// Update shape: every field optional. Absent fields keep their stored
/// values (partial-update semantics).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}
