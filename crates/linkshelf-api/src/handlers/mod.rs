//! HTTP handlers for linkshelf-api.

pub mod bookmarks;
pub mod health;
pub mod users;

use uuid::Uuid;

/// Parse a path segment as a record ID.
///
/// A segment that is not a UUID cannot name any stored record, so callers
/// treat `None` exactly like an unknown ID.
pub(crate) fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}
