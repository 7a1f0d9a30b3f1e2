//! User repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use linkshelf_core::{Error, Result, User, UserRepository};

/// PostgreSQL implementation of UserRepository.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self) -> Result<User> {
        let id: Uuid = sqlx::query_scalar("INSERT INTO users (id) VALUES ($1) RETURNING id")
            .bind(Uuid::now_v7())
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(User { id })
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let found: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(found.map(|id| User { id }))
    }
}
