//! Core data models for linkshelf.
//!
//! These types are shared across all linkshelf crates and represent
//! the core domain entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// BOOKMARK TYPES
// =============================================================================

/// A stored bookmark.
///
/// `tags` is kept exactly as supplied: a single comma-separated string.
/// It is never split into a set before storage or filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Bookmark {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub tags: String,
    /// Assigned by the store at creation, never modified afterwards.
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied bookmark fields, used by both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookmarkInput {
    pub title: String,
    pub url: String,
    pub tags: String,
}

impl BookmarkInput {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            tags: tags.into(),
        }
    }

    /// Materialize a stored bookmark from this input.
    pub fn into_bookmark(self, id: Uuid, created_at: DateTime<Utc>) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            tags: self.tags,
            created_at,
        }
    }
}

// =============================================================================
// USER TYPES
// =============================================================================

/// A user. Only the identifier is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub id: Uuid,
}
