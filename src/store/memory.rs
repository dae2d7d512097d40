use std::sync::Mutex;

use async_trait::async_trait;

use crate::store::{NewPost, Post, PostStore, StoreError};

/// In-memory substitute for the Postgres store. Used by tests to observe
/// gateway behavior without a database, including the failure paths.
#[derive(Default)]
pub struct MemoryPostStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    next_id: i64,
    failing: bool,
    calls: usize,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// When set, every store operation returns `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    /// Number of store operations attempted, failing or not. Lets tests
    /// assert that denied requests never reach the store.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().calls
    }

    fn check(inner: &mut Inner) -> Result<(), StoreError> {
        inner.calls += 1;
        if inner.failing {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&mut inner)?;
        Ok(inner.posts.clone())
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&mut inner)?;
        inner.next_id += 1;
        let created = Post {
            id: inner.next_id,
            title: post.title,
            content: post.content,
            published: post.published,
        };
        inner.posts.push(created.clone());
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        Self::check(&mut inner)
    }
}
