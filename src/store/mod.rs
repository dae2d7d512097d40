pub mod memory;
pub mod models;
pub mod postgres;

pub use memory::MemoryPostStore;
pub use models::{NewPost, Post};
pub use postgres::PgPostStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the persistence layer, tagged by kind so logs can tell
/// infrastructure trouble apart from bad queries even though the HTTP
/// surface collapses both to a generic message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Short tag for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::Unavailable(_) => "unavailable",
            StoreError::Query(_) => "query",
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Unavailable(err.to_string()),
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// The persistence contract the gateway consumes. Injected as a trait
/// object so tests can substitute an in-memory fake.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch the complete unfiltered collection, in store-default order.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Insert one post and return the persisted record, including the
    /// store-assigned id.
    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError>;

    /// Ping the backend for connectivity.
    async fn health_check(&self) -> Result<(), StoreError>;
}
