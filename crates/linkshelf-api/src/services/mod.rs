//! Service layer between the HTTP handlers and the repositories.

pub mod bookmark_service;
pub mod user_service;

pub use bookmark_service::BookmarkService;
pub use user_service::UserService;
