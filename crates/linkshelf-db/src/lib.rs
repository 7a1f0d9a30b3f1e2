//! # linkshelf-db
//!
//! Storage layer for linkshelf.
//!
//! This crate provides:
//! - Connection pool management
//! - PostgreSQL repository implementations for bookmarks and users
//! - In-memory repository implementations of the same traits
//! - Embedded schema migrations
//!
//! ## Example
//!
//! ```rust,no_run
//! use linkshelf_db::{BookmarkInput, BookmarkRepository, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/linkshelf").await?;
//!     db.migrate().await?;
//!
//!     let bookmark = db
//!         .bookmarks
//!         .create(BookmarkInput::new("Rust", "https://www.rust-lang.org", "lang,rust"))
//!         .await?;
//!
//!     println!("Created bookmark: {}", bookmark.id);
//!     Ok(())
//! }
//! ```
pub mod bookmarks;
pub mod memory;
pub mod pool;
pub mod users;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use linkshelf_core::*;

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// Re-export repository implementations
pub use bookmarks::PgBookmarkRepository;
pub use memory::{MemoryBookmarkRepository, MemoryUserRepository};
pub use pool::{create_pool, create_pool_with_config, log_pool_metrics, PoolConfig};
pub use users::PgUserRepository;

/// Schema migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Combined database context with all repositories.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Bookmark repository for CRUD operations.
    pub bookmarks: PgBookmarkRepository,
    /// User repository for lookups.
    pub users: PgUserRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            bookmarks: PgBookmarkRepository::new(pool.clone()),
            users: PgUserRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}
