//! Bookmark orchestration.
//!
//! The service shapes handler arguments into repository calls and passes
//! results and errors through unchanged.

use std::sync::Arc;
use std::time::Instant;

use linkshelf_core::{Bookmark, BookmarkFilter, BookmarkInput, BookmarkRepository, Result};
use tracing::{debug, info};
use uuid::Uuid;

/// Service over an injected [`BookmarkRepository`].
#[derive(Clone)]
pub struct BookmarkService {
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl BookmarkService {
    pub fn new(bookmarks: Arc<dyn BookmarkRepository>) -> Self {
        Self { bookmarks }
    }

    pub async fn create_bookmark(&self, input: BookmarkInput) -> Result<Bookmark> {
        let bookmark = self.bookmarks.create(input).await?;
        info!(
            subsystem = "api",
            component = "bookmark_service",
            op = "create",
            bookmark_id = %bookmark.id,
            "Bookmark created"
        );
        Ok(bookmark)
    }

    /// List bookmarks. Empty `tag` or `query` values impose no constraint.
    pub async fn list_bookmarks(
        &self,
        tag: Option<String>,
        query: Option<String>,
    ) -> Result<Vec<Bookmark>> {
        let start = Instant::now();
        let filter = BookmarkFilter::new(tag, query);
        let bookmarks = self.bookmarks.list(&filter).await?;
        debug!(
            subsystem = "api",
            component = "bookmark_service",
            op = "list",
            result_count = bookmarks.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Bookmarks listed"
        );
        Ok(bookmarks)
    }

    pub async fn update_bookmark(&self, id: Uuid, input: BookmarkInput) -> Result<Bookmark> {
        self.bookmarks.update(id, input).await
    }

    pub async fn delete_bookmark(&self, id: Uuid) -> Result<()> {
        self.bookmarks.delete(id).await
    }

    pub async fn delete_all_bookmarks(&self) -> Result<()> {
        self.bookmarks.delete_all().await?;
        info!(
            subsystem = "api",
            component = "bookmark_service",
            op = "delete_all",
            "All bookmarks deleted"
        );
        Ok(())
    }
}
