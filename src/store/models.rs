use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted post. `id` is assigned by the store and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Fields for a post about to be inserted. Built by the gateway, not
/// deserialized from client input: `published` is always set by the
/// handler, never by the caller.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub published: bool,
}
