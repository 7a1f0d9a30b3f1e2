//! Bookmark repository implementation.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use tracing::debug;
use uuid::Uuid;

use linkshelf_core::{Bookmark, BookmarkFilter, BookmarkInput, BookmarkRepository, Error, Result};

use crate::escape_like;

const BOOKMARK_COLUMNS: &str = "id, title, url, tags, created_at";

/// PostgreSQL implementation of BookmarkRepository.
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: Pool<Postgres>,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

// =============================================================================
// LIST QUERY BUILDING
// =============================================================================

/// Wrap a filter value as a literal `LIKE` substring pattern.
pub fn contains_pattern(value: &str) -> String {
    format!("%{}%", escape_like(value))
}

/// Build the list query for a filter.
///
/// Parameters are numbered in order: the tag pattern (if any) then the
/// query pattern (if any). The query pattern is reused for title and url.
pub fn build_list_query(filter: &BookmarkFilter) -> String {
    let mut query = format!("SELECT {} FROM bookmarks WHERE 1=1 ", BOOKMARK_COLUMNS);
    let mut param_idx = 1;

    if filter.tag().is_some() {
        query.push_str(&format!("AND tags LIKE ${} ESCAPE '\\' ", param_idx));
        param_idx += 1;
    }

    if filter.query().is_some() {
        query.push_str(&format!(
            "AND (title LIKE ${0} ESCAPE '\\' OR url LIKE ${0} ESCAPE '\\') ",
            param_idx
        ));
    }

    query.push_str("ORDER BY created_at, id");
    query
}

fn map_row_to_bookmark(row: PgRow) -> Bookmark {
    Bookmark {
        id: row.get("id"),
        title: row.get("title"),
        url: row.get("url"),
        tags: row.get("tags"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    async fn create(&self, input: BookmarkInput) -> Result<Bookmark> {
        let id = Uuid::now_v7();
        let row = sqlx::query(&format!(
            "INSERT INTO bookmarks (id, title, url, tags) VALUES ($1, $2, $3, $4) RETURNING {}",
            BOOKMARK_COLUMNS
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.tags)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "bookmarks",
            op = "create",
            bookmark_id = %id,
            "Bookmark inserted"
        );
        Ok(map_row_to_bookmark(row))
    }

    async fn list(&self, filter: &BookmarkFilter) -> Result<Vec<Bookmark>> {
        let start = Instant::now();
        let sql = build_list_query(filter);

        let mut q = sqlx::query(&sql);
        if let Some(tag) = filter.tag() {
            q = q.bind(contains_pattern(tag));
        }
        if let Some(text) = filter.query() {
            q = q.bind(contains_pattern(text));
        }

        let rows = q.fetch_all(&self.pool).await.map_err(Error::Database)?;
        let bookmarks: Vec<Bookmark> = rows.into_iter().map(map_row_to_bookmark).collect();

        debug!(
            subsystem = "database",
            component = "bookmarks",
            op = "list",
            tag = filter.tag().unwrap_or(""),
            query = filter.query().unwrap_or(""),
            result_count = bookmarks.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Bookmarks listed"
        );
        Ok(bookmarks)
    }

    async fn fetch(&self, id: Uuid) -> Result<Option<Bookmark>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM bookmarks WHERE id = $1",
            BOOKMARK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(row.map(map_row_to_bookmark))
    }

    async fn update(&self, id: Uuid, input: BookmarkInput) -> Result<Bookmark> {
        let row = sqlx::query(&format!(
            "UPDATE bookmarks SET title = $2, url = $3, tags = $4 WHERE id = $1 RETURNING {}",
            BOOKMARK_COLUMNS
        ))
        .bind(id)
        .bind(&input.title)
        .bind(&input.url)
        .bind(&input.tags)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        row.map(map_row_to_bookmark)
            .ok_or(Error::BookmarkNotFound(id))
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "bookmarks",
            op = "delete",
            bookmark_id = %id,
            rows_affected = result.rows_affected(),
            "Bookmark delete executed"
        );
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookmarks")
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "database",
            component = "bookmarks",
            op = "delete_all",
            rows_affected = result.rows_affected(),
            "All bookmarks deleted"
        );
        Ok(())
    }
}
