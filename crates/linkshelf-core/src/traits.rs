//! Core traits for linkshelf abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::filter::BookmarkFilter;
use crate::models::*;

// =============================================================================
// BOOKMARK REPOSITORY TRAITS
// =============================================================================

/// Repository for bookmark CRUD operations.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Insert a new bookmark. The repository assigns `id` and `created_at`.
    async fn create(&self, input: BookmarkInput) -> Result<Bookmark>;

    /// List bookmarks matching the filter, in creation order.
    async fn list(&self, filter: &BookmarkFilter) -> Result<Vec<Bookmark>>;

    /// Fetch a single bookmark by ID.
    async fn fetch(&self, id: Uuid) -> Result<Option<Bookmark>>;

    /// Replace title, url and tags of an existing bookmark.
    ///
    /// Fails with `Error::BookmarkNotFound` when `id` does not exist.
    async fn update(&self, id: Uuid, input: BookmarkInput) -> Result<Bookmark>;

    /// Delete a bookmark. Deleting an unknown ID is a no-op.
    async fn delete(&self, id: Uuid) -> Result<()>;

    /// Delete every bookmark.
    async fn delete_all(&self) -> Result<()>;
}

// =============================================================================
// USER REPOSITORY TRAITS
// =============================================================================

/// Repository for user lookups.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with a freshly generated ID.
    async fn create(&self) -> Result<User>;

    /// Find a user by ID, `None` if absent.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
}
