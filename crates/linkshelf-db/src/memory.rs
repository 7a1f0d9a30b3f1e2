//! In-process repositories.
//!
//! These implement the same traits as the PostgreSQL repositories and apply
//! [`BookmarkFilter::matches`] directly. Rows are kept in insertion order,
//! which is the natural retrieval order of the store.
//! Nothing survives a restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use linkshelf_core::{
    Bookmark, BookmarkFilter, BookmarkInput, BookmarkRepository, Error, Result, User,
    UserRepository,
};

/// In-memory implementation of BookmarkRepository.
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct MemoryBookmarkRepository {
    rows: Arc<RwLock<Vec<Bookmark>>>,
}

impl MemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookmarks.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl BookmarkRepository for MemoryBookmarkRepository {
    async fn create(&self, input: BookmarkInput) -> Result<Bookmark> {
        let bookmark = input.into_bookmark(Uuid::now_v7(), Utc::now());
        self.rows.write().await.push(bookmark.clone());

        debug!(
            subsystem = "memory",
            component = "bookmarks",
            op = "create",
            bookmark_id = %bookmark.id,
            "Bookmark inserted"
        );
        Ok(bookmark)
    }

    async fn list(&self, filter: &BookmarkFilter) -> Result<Vec<Bookmark>> {
        let rows = self.rows.read().await;
        Ok(filter.apply(rows.iter()))
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Bookmark>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|b| b.id == id).cloned())
    }

    async fn update(&self, id: Uuid, input: BookmarkInput) -> Result<Bookmark> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(Error::BookmarkNotFound(id))?;

        row.title = input.title;
        row.url = input.url;
        row.tags = input.tags;
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        self.rows.write().await.retain(|b| b.id != id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.rows.write().await.clear();
        Ok(())
    }
}

/// In-memory implementation of UserRepository.
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self) -> Result<User> {
        let user = User { id: Uuid::now_v7() };
        self.users.write().await.push(user);
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = MemoryBookmarkRepository::new();
        let other = repo.clone();

        repo.create(BookmarkInput::new("A", "https://a.example", "x"))
            .await
            .unwrap();

        assert_eq!(other.len().await, 1);
        assert!(!other.is_empty().await);
    }
}
