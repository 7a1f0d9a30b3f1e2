//! Shared handler state and repository wiring.

use std::sync::Arc;

use linkshelf_core::{BookmarkRepository, UserRepository};
use linkshelf_db::{Database, MemoryBookmarkRepository, MemoryUserRepository};

use crate::services::{BookmarkService, UserService};

/// The repository implementations a server runs against.
#[derive(Clone)]
pub struct Repositories {
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Repositories {
    /// PostgreSQL-backed repositories sharing the database pool.
    pub fn postgres(db: &Database) -> Self {
        Self {
            bookmarks: Arc::new(db.bookmarks.clone()),
            users: Arc::new(db.users.clone()),
        }
    }

    /// Fresh, empty in-process repositories.
    pub fn memory() -> Self {
        Self::from_memory(MemoryBookmarkRepository::new(), MemoryUserRepository::new())
    }

    /// Wrap existing in-process repositories. Callers may keep clones to
    /// inspect or seed the same storage.
    pub fn from_memory(bookmarks: MemoryBookmarkRepository, users: MemoryUserRepository) -> Self {
        Self {
            bookmarks: Arc::new(bookmarks),
            users: Arc::new(users),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub bookmarks: BookmarkService,
    pub users: UserService,
}

impl AppState {
    pub fn new(repos: Repositories) -> Self {
        Self {
            bookmarks: BookmarkService::new(repos.bookmarks),
            users: UserService::new(repos.users),
        }
    }
}
