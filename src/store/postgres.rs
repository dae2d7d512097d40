use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::store::{NewPost, Post, PostStore, StoreError};

/// Postgres-backed store. Holds a connection pool; all pooling, timeout
/// and retry behavior is the pool's.
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        info!("connected to posts database");
        Ok(Self { pool })
    }

    /// Create the posts table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                published BOOLEAN NOT NULL DEFAULT FALSE
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content, published FROM posts")
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, StoreError> {
        let created = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (title, content, published)
             VALUES ($1, $2, $3)
             RETURNING id, title, content, published",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.published)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
