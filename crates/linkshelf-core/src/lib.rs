//! # linkshelf-core
//!
//! Core types, traits, and abstractions for the linkshelf bookmark service.
//!
//! This crate provides the bookmark and user data structures, the
//! [`BookmarkFilter`] that decides which bookmarks a listing returns, and the
//! repository traits that the storage crates implement.

pub mod error;
pub mod filter;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use filter::BookmarkFilter;
pub use models::*;
pub use traits::*;
