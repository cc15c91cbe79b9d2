//! MongoDB adapter for the user store.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use serde::{Deserialize, Serialize};

use super::{StoreError, UserStore};
use crate::users::models::{CreateUserRequest, UpdateUserRequest, User};

const USERS_COLLECTION: &str = "users";

/// Stored document shape. `_id` is the driver's native ObjectId; the
/// domain type carries its hex serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
    age: u32,
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        Self {
            id: document.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: document.name,
            email: document.email,
            age: document.age,
        }
    }
}

pub struct MongoUserStore {
    database: Database,
}

impl MongoUserStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }
}

impl std::fmt::Debug for MongoUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoUserStore")
            .field("database", &self.database.name())
            .finish()
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}

fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

/// Build the `$set` document for a partial update; only fields present in
/// the request are written.
fn set_document(changes: &UpdateUserRequest) -> Document {
    let mut set = Document::new();
    if let Some(name) = &changes.name {
        set.insert("name", name.as_str());
    }
    if let Some(email) = &changes.email {
        set.insert("email", email.as_str());
    }
    if let Some(age) = changes.age {
        set.insert("age", i64::from(age));
    }
    set
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.collection().find(doc! {}).await?;
        let documents: Vec<UserDocument> = cursor.try_collect().await?;
        Ok(documents.into_iter().map(User::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<User>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };
        let document = self.collection().find_one(doc! { "_id": oid }).await?;
        Ok(document.map(User::from))
    }

    async fn create(&self, input: CreateUserRequest) -> Result<User, StoreError> {
        let document = UserDocument {
            id: Some(ObjectId::new()),
            name: input.name,
            email: input.email,
            age: input.age,
        };
        self.collection().insert_one(&document).await?;
        Ok(User::from(document))
    }

    async fn update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(None);
        };

        let set = set_document(&changes);
        if set.is_empty() {
            // Nothing to merge; report the current representation.
            let document = self.collection().find_one(doc! { "_id": oid }).await?;
            return Ok(document.map(User::from));
        }

        let document = self
            .collection()
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(document.map(User::from))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(oid) = parse_object_id(id) else {
            return Ok(false);
        };
        let result = self.collection().delete_one(doc! { "_id": oid }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> bool {
        self.database.run_command(doc! { "ping": 1 }).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_document_includes_only_provided_fields() {
        let changes = UpdateUserRequest {
            name: None,
            email: Some("new@example.com".to_string()),
            age: Some(30),
        };

        let set = set_document(&changes);
        assert!(!set.contains_key("name"));
        assert_eq!(set.get_str("email").unwrap(), "new@example.com");
        assert_eq!(set.get_i64("age").unwrap(), 30);
    }

    #[test]
    fn set_document_is_empty_for_an_empty_update() {
        assert!(set_document(&UpdateUserRequest::default()).is_empty());
    }

    #[test]
    fn malformed_identifiers_do_not_parse() {
        assert!(parse_object_id("not-an-object-id").is_none());
        assert!(parse_object_id("").is_none());

        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()), Some(oid));
    }

    #[test]
    fn document_maps_to_domain_user_with_hex_id() {
        let oid = ObjectId::new();
        let document = UserDocument {
            id: Some(oid),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
        };

        let user = User::from(document);
        assert_eq!(user.id, oid.to_hex());
        assert_eq!(user.name, "Ada");
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.age, 36);
    }
}
